use chrono::Local;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::services::forecast_service::{DEFAULT_TRIALS, ForecastConfig};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every forecast.
#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    /// Forecast start date (YYYY-MM-DD)
    #[arg(short, long, default_value_t = default_start_date())]
    pub start_date: String,
    /// Number of Monte Carlo trials
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,
    /// Seed for reproducible forecasts
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ForecastArgs {
    pub fn config(&self) -> ForecastConfig {
        ForecastConfig {
            trials: self.trials,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast how many items get done within a number of days
    HowMany {
        /// Throughput YAML file
        #[arg(short = 'f', long)]
        throughput: String,
        /// Number of days to forecast
        #[arg(short, long)]
        days: usize,
        /// Output report file (.yaml or .json)
        #[arg(short, long)]
        output: String,
        #[command(flatten)]
        forecast: ForecastArgs,
    },
    /// Forecast when a number of remaining items will be done
    When {
        /// Throughput YAML file
        #[arg(short = 'f', long)]
        throughput: String,
        /// Number of remaining items
        #[arg(short, long)]
        remaining_items: usize,
        /// Output report file (.yaml or .json)
        #[arg(short, long)]
        output: String,
        /// Date to report the likelihood of being done by (YYYY-MM-DD)
        #[arg(short, long)]
        target_date: Option<String>,
        #[command(flatten)]
        forecast: ForecastArgs,
    },
    /// Forecast work items of several teams honoring each team's WIP limit
    ForecastWorkItems {
        /// Work items YAML file
        #[arg(short, long)]
        input: String,
        /// Output report file (.yaml or .json)
        #[arg(short, long)]
        output: String,
        #[command(flatten)]
        forecast: ForecastArgs,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
