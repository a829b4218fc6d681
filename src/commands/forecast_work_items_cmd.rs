use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_portfolio_report;
use crate::commands::report_output::{CommandError, data_source_name, parse_date, write_report};
use crate::services::forecast::{DEFAULT_PROBABILITIES, WhenForecast};
use crate::services::forecast_report::{PortfolioReport, WorkItemReport};
use crate::services::forecast_service::ForecastService;
use crate::services::work_items_yaml::load_portfolio_from_yaml_file;

pub fn forecast_work_items_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::ForecastWorkItems {
        input,
        output,
        forecast,
    } = cmd
    {
        let start_date = parse_date(&forecast.start_date)?;
        let portfolio = load_portfolio_from_yaml_file(&input)?;

        let mut service = ForecastService::new(forecast.config())?;
        let forecasts = service.forecast_items(&portfolio.teams, &portfolio.work_items)?;

        let unforecastable = WhenForecast::default();
        let work_items = portfolio
            .work_items
            .iter()
            .map(|item| {
                let forecast = forecasts.get(&item.id).unwrap_or(&unforecastable);
                WorkItemReport::new(item, forecast, start_date, &DEFAULT_PROBABILITIES)
            })
            .collect::<Vec<_>>();
        let report = PortfolioReport {
            data_source: data_source_name(&input),
            name: portfolio.name.clone(),
            start_date: start_date.format("%Y-%m-%d").to_string(),
            trials: service.trials(),
            work_items,
        };
        write_report(&output, &report)?;

        println!("{}", format_portfolio_report(&report));
        println!(
            "Forecast for {} work items written to {output}",
            report.work_items.len()
        );
    }
    Ok(())
}
