use std::collections::BTreeMap;

/// Maps a simulated outcome (items completed, days elapsed) to the number of
/// trials that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    occurrences: BTreeMap<usize, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, outcome: usize) {
        *self.occurrences.entry(outcome).or_insert(0) += 1;
    }

    pub fn add(&mut self, outcome: usize, count: usize) {
        if count > 0 {
            *self.occurrences.entry(outcome).or_insert(0) += count;
        }
    }

    pub fn occurrences_of(&self, outcome: usize) -> usize {
        self.occurrences.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of trials recorded.
    pub fn total(&self) -> usize {
        self.occurrences.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn min_outcome(&self) -> Option<usize> {
        self.occurrences.keys().next().copied()
    }

    pub fn max_outcome(&self) -> Option<usize> {
        self.occurrences.keys().next_back().copied()
    }

    /// Outcomes in ascending order with their occurrence counts.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, usize)> + '_ {
        self.occurrences
            .iter()
            .map(|(outcome, count)| (*outcome, *count))
    }
}

impl FromIterator<usize> for Histogram {
    fn from_iter<I: IntoIterator<Item = usize>>(outcomes: I) -> Self {
        let mut histogram = Histogram::new();
        for outcome in outcomes {
            histogram.increment(outcome);
        }
        histogram
    }
}
