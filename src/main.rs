use clap::Parser;

use throughput_forecast::commands::base_commands::{CliArgs, Commands};
use throughput_forecast::commands::completions_cmd::completions_command;
use throughput_forecast::commands::forecast_work_items_cmd::forecast_work_items_command;
use throughput_forecast::commands::how_many_cmd::how_many_command;
use throughput_forecast::commands::when_cmd::when_command;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        cmd @ Commands::HowMany { .. } => how_many_command(cmd),
        cmd @ Commands::When { .. } => when_command(cmd),
        cmd @ Commands::ForecastWorkItems { .. } => forecast_work_items_command(cmd),
        cmd @ Commands::Completions { .. } => {
            completions_command(cmd);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Failed to run forecast: {e}");
        std::process::exit(1);
    }
}
