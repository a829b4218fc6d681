use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::throughput::{Throughput, ThroughputHistory};

#[derive(Error, Debug)]
pub enum ThroughputYamlError {
    #[error("failed to read throughput yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse throughput yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

#[derive(Deserialize)]
struct ThroughputRecord {
    date: String,
    completed_issues: usize,
}

pub fn deserialize_throughput_from_yaml_str(
    input: &str,
) -> Result<Vec<Throughput>, ThroughputYamlError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<ThroughputRecord> = serde_yaml::from_str(input)?;
    records
        .into_iter()
        .map(|record| {
            let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
                .map_err(|_| ThroughputYamlError::InvalidDate(record.date.clone()))?;
            Ok(Throughput {
                date,
                completed_issues: record.completed_issues,
            })
        })
        .collect()
}

/// Reads a throughput file into a gap-free daily run chart.
pub fn load_throughput_history<P: AsRef<Path>>(
    path: P,
) -> Result<ThroughputHistory, ThroughputYamlError> {
    let contents = std::fs::read_to_string(path)?;
    let records = deserialize_throughput_from_yaml_str(&contents)?;
    Ok(ThroughputHistory::from_records(&records))
}
