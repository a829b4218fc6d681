use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::services::forecast_service::ForecastError;
use crate::services::histogram_plot::HistogramError;
use crate::services::throughput_yaml::ThroughputYamlError;
use crate::services::work_items_yaml::WorkItemsYamlError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Throughput(#[from] ThroughputYamlError),
    #[error(transparent)]
    WorkItems(#[from] WorkItemsYamlError),
    #[error(transparent)]
    Forecast(#[from] ForecastError),
    #[error(transparent)]
    Histogram(#[from] HistogramError),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("failed to serialize report as yaml: {0}")]
    SerializeYaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    SerializeJson(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

pub fn parse_date(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidDate(value.to_string()))
}

/// Writes a report as JSON when the file ends in `.json`, as YAML otherwise.
pub fn write_report<T: Serialize>(path: &str, report: &T) -> Result<(), CommandError> {
    let contents = if is_json(path) {
        serde_json::to_string_pretty(report)?
    } else {
        serde_yaml::to_string(report)?
    };

    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })
}

pub fn data_source_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}
