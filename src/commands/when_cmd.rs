use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_when_report;
use crate::commands::report_output::{CommandError, data_source_name, parse_date, write_report};
use crate::services::forecast::DEFAULT_PROBABILITIES;
use crate::services::forecast_report::WhenReport;
use crate::services::forecast_service::ForecastService;
use crate::services::histogram_plot::write_histogram_png;
use crate::services::throughput_yaml::load_throughput_history;

pub fn when_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::When {
        throughput,
        remaining_items,
        output,
        target_date,
        forecast,
    } = cmd
    {
        let start_date = parse_date(&forecast.start_date)?;
        let target_date = target_date.as_deref().map(parse_date).transpose()?;
        let history = load_throughput_history(&throughput)?;

        let mut service = ForecastService::new(forecast.config())?;
        let when = service.when(&history, remaining_items)?;

        let mut report = WhenReport::new(
            &when,
            remaining_items,
            start_date,
            target_date,
            &DEFAULT_PROBABILITIES,
        );
        report.data_source = data_source_name(&throughput);
        write_report(&output, &report)?;

        println!("{}", format_when_report(&report));
        println!("When forecast for {remaining_items} items written to {output}");

        if !when.is_empty() {
            let histogram_path = format!("{output}.png");
            write_histogram_png(&histogram_path, when.histogram(), "When Forecast", "Days")?;
            println!("Forecast histogram written to {histogram_path}");
        }
    }
    Ok(())
}
