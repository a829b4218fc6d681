use chrono::NaiveDate;

/// Completed items on a single calendar day, as delivered by an issue tracker export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throughput {
    pub date: NaiveDate,
    pub completed_issues: usize,
}

/// Per-day completed item counts over a history window, oldest day first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThroughputHistory {
    counts: Vec<usize>,
}

impl ThroughputHistory {
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    /// Builds a run chart from dated records. Records are ordered by date and
    /// calendar days missing between the first and last record count as zero.
    pub fn from_records(records: &[Throughput]) -> Self {
        let mut sorted: Vec<&Throughput> = records.iter().collect();
        sorted.sort_by_key(|record| record.date);

        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return Self::default();
        };

        let days = last.date.signed_duration_since(first.date).num_days() as usize + 1;
        let mut counts = vec![0; days];
        for record in &sorted {
            let index = record.date.signed_duration_since(first.date).num_days() as usize;
            counts[index] += record.completed_issues;
        }

        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count_on_day(&self, day: usize) -> Option<usize> {
        self.counts.get(day).copied()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}
