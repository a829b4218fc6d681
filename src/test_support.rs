use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::domain::team::Team;
use crate::domain::throughput::ThroughputHistory;
use crate::services::sampler::{Sampler, SamplerError};

// A Sampler that replays a fixed script of draws, then keeps returning the fallback
pub struct SequenceSampler {
    draws: VecDeque<usize>,
    fallback: usize,
    pub requested_ranges: Vec<i64>,
}

impl SequenceSampler {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            fallback: 0,
            requested_ranges: Vec::new(),
        }
    }

    pub fn always(value: usize) -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: value,
            requested_ranges: Vec::new(),
        }
    }
}

impl Sampler for SequenceSampler {
    fn sample(&mut self, max_inclusive: i64) -> Result<usize, SamplerError> {
        self.requested_ranges.push(max_inclusive);
        if max_inclusive < 0 {
            return Err(SamplerError::NegativeRange(max_inclusive));
        }
        Ok(self.draws.pop_front().unwrap_or(self.fallback))
    }
}

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn team_with_throughput(name: &str, counts: &[usize], wip_limit: usize) -> Team {
    Team::new(name, ThroughputHistory::new(counts.to_vec()), wip_limit)
}
