use crate::services::forecast_report::{
    DaysPercentile, HowManyReport, PortfolioReport, WhenReport, WorkItemReport,
};

pub fn format_how_many_report(report: &HowManyReport) -> String {
    let mut lines = Vec::new();
    lines.push("How Many Forecast".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Period: {} to {}", report.start_date, report.end_date));
    lines.push(format!("Days: {}", report.days));
    lines.push(format!("Trials: {}", report.trials));
    lines.push(String::new());
    lines.push("Probability | Items".to_string());
    lines.push("------------|------".to_string());
    for percentile in &report.percentiles {
        lines.push(format!("{}% | {}", percentile.probability, percentile.items));
    }

    lines.join("\n")
}

pub fn format_when_report(report: &WhenReport) -> String {
    let mut lines = Vec::new();
    lines.push("When Forecast".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Start date: {}", report.start_date));
    lines.push(format!("Trials: {}", report.trials));
    lines.push(format!("Remaining items: {}", report.remaining_items));
    if let (Some(target_date), Some(likelihood)) = (&report.target_date, report.likelihood) {
        lines.push(format!("Likelihood by {target_date}: {likelihood:.2}%"));
    }
    lines.push(String::new());
    push_days_table(&mut lines, report.forecastable, &report.percentiles);

    lines.join("\n")
}

pub fn format_portfolio_report(report: &PortfolioReport) -> String {
    let mut lines = Vec::new();
    lines.push("Work Item Forecast".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    if let Some(name) = &report.name {
        lines.push(format!("Portfolio: {name}"));
    }
    lines.push(format!("Start date: {}", report.start_date));
    lines.push(format!("Trials: {}", report.trials));
    for item in &report.work_items {
        lines.push(String::new());
        lines.push(format_work_item_heading(item));
        push_days_table(&mut lines, item.forecastable, &item.percentiles);
    }

    lines.join("\n")
}

fn format_work_item_heading(item: &WorkItemReport) -> String {
    let title = match &item.name {
        Some(name) => format!("{} {}", item.id, name),
        None => item.id.clone(),
    };
    format!(
        "{title} ({remaining}/{total} remaining)",
        remaining = item.remaining_items,
        total = item.total_items
    )
}

fn push_days_table(lines: &mut Vec<String>, forecastable: bool, percentiles: &[DaysPercentile]) {
    if !forecastable {
        lines.push("No forecast: a team has no completed items in its history".to_string());
        return;
    }
    lines.push("Probability | Days | Date".to_string());
    lines.push("------------|------|-----".to_string());
    for percentile in percentiles {
        lines.push(format!(
            "{}% | {} | {}",
            percentile.probability, percentile.days, percentile.date
        ));
    }
}
