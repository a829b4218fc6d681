use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::work_item::WorkItem;
use crate::services::forecast::{HowManyForecast, WhenForecast};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ItemsPercentile {
    pub probability: u32,
    pub items: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DaysPercentile {
    pub probability: u32,
    pub days: usize,
    pub date: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HowManyReport {
    pub data_source: String,
    pub start_date: String,
    pub end_date: String,
    pub days: usize,
    pub trials: usize,
    pub percentiles: Vec<ItemsPercentile>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WhenReport {
    pub data_source: String,
    pub start_date: String,
    pub trials: usize,
    pub remaining_items: usize,
    pub forecastable: bool,
    pub percentiles: Vec<DaysPercentile>,
    pub target_date: Option<String>,
    pub likelihood: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WorkItemReport {
    pub id: String,
    pub name: Option<String>,
    pub remaining_items: usize,
    pub total_items: usize,
    pub forecastable: bool,
    pub percentiles: Vec<DaysPercentile>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PortfolioReport {
    pub data_source: String,
    pub name: Option<String>,
    pub start_date: String,
    pub trials: usize,
    pub work_items: Vec<WorkItemReport>,
}

impl HowManyReport {
    pub fn new(forecast: &HowManyForecast, start_date: NaiveDate, probabilities: &[u32]) -> Self {
        Self {
            data_source: String::new(),
            start_date: format_date(start_date),
            end_date: format_date(date_after(start_date, forecast.days())),
            days: forecast.days(),
            trials: forecast.trials(),
            percentiles: forecast
                .forecasts(probabilities)
                .into_iter()
                .map(|value| ItemsPercentile {
                    probability: value.probability,
                    items: value.value,
                })
                .collect(),
        }
    }
}

impl WhenReport {
    pub fn new(
        forecast: &WhenForecast,
        remaining_items: usize,
        start_date: NaiveDate,
        target_date: Option<NaiveDate>,
        probabilities: &[u32],
    ) -> Self {
        let likelihood = target_date.map(|target| {
            let days = target.signed_duration_since(start_date).num_days().max(0) as usize;
            forecast.likelihood(days)
        });

        Self {
            data_source: String::new(),
            start_date: format_date(start_date),
            trials: forecast.trials(),
            remaining_items,
            forecastable: !forecast.is_empty(),
            percentiles: days_percentiles(forecast, start_date, probabilities),
            target_date: target_date.map(format_date),
            likelihood,
        }
    }
}

impl WorkItemReport {
    pub fn new(
        item: &WorkItem,
        forecast: &WhenForecast,
        start_date: NaiveDate,
        probabilities: &[u32],
    ) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            remaining_items: item.remaining_work(),
            total_items: item.total_work(),
            forecastable: !forecast.is_empty(),
            percentiles: days_percentiles(forecast, start_date, probabilities),
        }
    }
}

fn days_percentiles(
    forecast: &WhenForecast,
    start_date: NaiveDate,
    probabilities: &[u32],
) -> Vec<DaysPercentile> {
    forecast
        .forecasts(probabilities)
        .into_iter()
        .map(|value| DaysPercentile {
            probability: value.probability,
            days: value.value,
            date: format_date(date_after(start_date, value.value)),
        })
        .collect()
}

fn date_after(start_date: NaiveDate, days: usize) -> NaiveDate {
    start_date
        .checked_add_signed(Duration::days(days as i64))
        .unwrap_or(NaiveDate::MAX)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
