use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::histogram::Histogram;
use crate::services::percentiles::{highest_value_reaching, lowest_value_reaching};

/// Certainty levels reported for every forecast.
pub const DEFAULT_PROBABILITIES: [u32; 4] = [50, 70, 85, 95];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastValue {
    pub probability: u32,
    pub value: usize,
}

/// Distribution of how many items get done within a fixed number of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowManyForecast {
    histogram: Histogram,
    days: usize,
}

impl HowManyForecast {
    pub fn new(histogram: Histogram, days: usize) -> Self {
        Self { histogram, days }
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn trials(&self) -> usize {
        self.histogram.total()
    }

    pub fn probability_of_at_least(&self, items: usize) -> f64 {
        let hits: usize = self
            .histogram
            .iter()
            .filter(|(outcome, _)| *outcome >= items)
            .map(|(_, count)| count)
            .sum();
        share(hits, self.trials())
    }

    pub fn probability_of_exactly(&self, items: usize) -> f64 {
        share(self.histogram.occurrences_of(items), self.trials())
    }

    /// Number of items completed with at least `probability` percent certainty.
    pub fn percentile(&self, probability: u32) -> Option<usize> {
        highest_value_reaching(&self.histogram, probability as f64)
    }

    pub fn forecasts(&self, probabilities: &[u32]) -> Vec<ForecastValue> {
        collect_forecasts(probabilities, |probability| self.percentile(probability))
    }
}

/// Distribution of the day on which remaining work is done. Day 0 means the
/// work is already complete. An empty forecast means the work cannot be
/// forecast at all, e.g. because a team never completed anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhenForecast {
    histogram: Histogram,
}

impl WhenForecast {
    pub fn new(histogram: Histogram) -> Self {
        Self { histogram }
    }

    /// Work that is already done: every trial finishes on day 0.
    pub fn completed(trials: usize) -> Self {
        let mut histogram = Histogram::new();
        histogram.add(0, trials);
        Self { histogram }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn trials(&self) -> usize {
        self.histogram.total()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    pub fn probability_within(&self, days: usize) -> f64 {
        let hits: usize = self
            .histogram
            .iter()
            .take_while(|(outcome, _)| *outcome <= days)
            .map(|(_, count)| count)
            .sum();
        share(hits, self.trials())
    }

    /// Chance in percent of being done within `days`.
    pub fn likelihood(&self, days: usize) -> f64 {
        self.probability_within(days) * 100.0
    }

    /// Days needed with at least `probability` percent certainty.
    pub fn percentile(&self, probability: u32) -> Option<usize> {
        lowest_value_reaching(&self.histogram, probability as f64)
    }

    pub fn forecasts(&self, probabilities: &[u32]) -> Vec<ForecastValue> {
        collect_forecasts(probabilities, |probability| self.percentile(probability))
    }

    pub fn expected_date(&self, start_date: NaiveDate, probability: u32) -> Option<NaiveDate> {
        let days = self.percentile(probability)?;
        start_date.checked_add_signed(Duration::days(days as i64))
    }
}

fn share(hits: usize, trials: usize) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    hits as f64 / trials as f64
}

fn collect_forecasts<F>(probabilities: &[u32], percentile: F) -> Vec<ForecastValue>
where
    F: Fn(u32) -> Option<usize>,
{
    probabilities
        .iter()
        .filter_map(|probability| {
            percentile(*probability).map(|value| ForecastValue {
                probability: *probability,
                value,
            })
        })
        .collect()
}
