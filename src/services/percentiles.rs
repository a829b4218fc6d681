//! Percentile helpers over trial histograms.
//!
//! - Empty histogram => `None`.
//! - The share of trials is compared against `percentile / 100`.

use crate::domain::histogram::Histogram;

/// Smallest outcome such that at least `percentile` percent of the trials
/// produced it or something smaller. Used for "done within N days".
pub fn lowest_value_reaching(histogram: &Histogram, percentile: f64) -> Option<usize> {
    let threshold = threshold(histogram, percentile);
    let mut cumulative = 0;
    let mut last = None;
    for (outcome, count) in histogram.iter() {
        cumulative += count;
        last = Some(outcome);
        if cumulative as f64 >= threshold {
            return Some(outcome);
        }
    }
    last
}

/// Largest outcome such that at least `percentile` percent of the trials
/// produced it or something larger. Used for "at least N items".
pub fn highest_value_reaching(histogram: &Histogram, percentile: f64) -> Option<usize> {
    let threshold = threshold(histogram, percentile);
    let mut cumulative = 0;
    let mut last = None;
    for (outcome, count) in histogram.iter().rev() {
        cumulative += count;
        last = Some(outcome);
        if cumulative as f64 >= threshold {
            return Some(outcome);
        }
    }
    last
}

fn threshold(histogram: &Histogram, percentile: f64) -> f64 {
    percentile.clamp(0.0, 100.0) / 100.0 * histogram.total() as f64
}
