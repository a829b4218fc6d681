use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_how_many_report;
use crate::commands::report_output::{CommandError, data_source_name, parse_date, write_report};
use crate::services::forecast::DEFAULT_PROBABILITIES;
use crate::services::forecast_report::HowManyReport;
use crate::services::forecast_service::ForecastService;
use crate::services::throughput_yaml::load_throughput_history;

pub fn how_many_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::HowMany {
        throughput,
        days,
        output,
        forecast,
    } = cmd
    {
        let start_date = parse_date(&forecast.start_date)?;
        let history = load_throughput_history(&throughput)?;

        let mut service = ForecastService::new(forecast.config())?;
        let how_many = service.how_many(&history, days)?;

        let mut report = HowManyReport::new(&how_many, start_date, &DEFAULT_PROBABILITIES);
        report.data_source = data_source_name(&throughput);
        write_report(&output, &report)?;

        println!("{}", format_how_many_report(&report));
        println!("How many forecast for {days} days written to {output}");
    }
    Ok(())
}
