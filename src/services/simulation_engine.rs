use crate::domain::histogram::Histogram;
use crate::domain::team::Team;
use crate::domain::throughput::ThroughputHistory;
use crate::services::sampler::{Sampler, SamplerError, draw_index};

/// Runs `trials` independent trials and counts how often each outcome occurred.
pub(crate) fn run_trials<E, F>(trials: usize, mut trial: F) -> Result<Histogram, E>
where
    F: FnMut() -> Result<usize, E>,
{
    let mut histogram = Histogram::new();
    for _ in 0..trials {
        histogram.increment(trial()?);
    }
    Ok(histogram)
}

/// Bootstrap draw: the throughput of a uniformly chosen historical day.
pub(crate) fn sample_throughput<S: Sampler + ?Sized>(
    throughput: &ThroughputHistory,
    sampler: &mut S,
) -> Result<usize, SamplerError> {
    let day = draw_index(sampler, throughput.len())?;
    throughput
        .count_on_day(day)
        .ok_or(SamplerError::OutOfRange {
            index: day,
            len: throughput.len(),
        })
}

/// Remaining work of one work item for one team while trials run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SimulationState {
    pub item: usize,
    initial_remaining: usize,
    remaining: usize,
    completion_days: Vec<usize>,
}

impl SimulationState {
    pub fn new(item: usize, remaining: usize) -> Self {
        Self {
            item,
            initial_remaining: remaining,
            remaining,
            completion_days: Vec::new(),
        }
    }

    pub fn has_work_remaining(&self) -> bool {
        self.remaining > 0
    }

    /// Day on which the work finished in each trial, in trial order.
    pub fn completion_days(&self) -> &[usize] {
        &self.completion_days
    }

    fn reset(&mut self) {
        self.remaining = self.initial_remaining;
    }

    fn close_item(&mut self, day: usize) {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.completion_days.push(day);
        }
    }
}

/// All simulation states a single team works on, in caller order.
#[derive(Debug)]
pub(crate) struct TeamGroup<'a> {
    pub team: &'a Team,
    pub states: Vec<SimulationState>,
}

impl<'a> TeamGroup<'a> {
    pub fn new(team: &'a Team) -> Self {
        Self {
            team,
            states: Vec::new(),
        }
    }

    pub fn has_work_remaining(&self) -> bool {
        self.states.iter().any(SimulationState::has_work_remaining)
    }

    pub fn simulate<S: Sampler + ?Sized>(
        &mut self,
        trials: usize,
        sampler: &mut S,
    ) -> Result<(), SamplerError> {
        for _ in 0..trials {
            self.simulate_trial(sampler)?;
        }
        Ok(())
    }

    fn simulate_trial<S: Sampler + ?Sized>(&mut self, sampler: &mut S) -> Result<(), SamplerError> {
        for state in &mut self.states {
            state.reset();
        }

        let mut day = 1;
        while self.has_work_remaining() {
            self.simulate_day(day, sampler)?;
            day += 1;
        }
        Ok(())
    }

    fn simulate_day<S: Sampler + ?Sized>(
        &mut self,
        day: usize,
        sampler: &mut S,
    ) -> Result<(), SamplerError> {
        let produced = sample_throughput(&self.team.throughput, sampler)?;

        let mut closed = 0;
        while closed < produced && self.has_work_remaining() {
            let index = self.pick_state_to_update(sampler)?;
            self.states[index].close_item(day);
            closed += 1;
        }
        Ok(())
    }

    /// Picks one of the first `min(wip, unfinished)` unfinished states, by position.
    fn pick_state_to_update<S: Sampler + ?Sized>(
        &self,
        sampler: &mut S,
    ) -> Result<usize, SamplerError> {
        let unfinished = self
            .states
            .iter()
            .filter(|state| state.has_work_remaining())
            .count();
        let active = self.team.wip_limit.min(unfinished);
        let slot = draw_index(sampler, active)?;

        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.has_work_remaining())
            .nth(slot)
            .map(|(index, _)| index)
            .ok_or(SamplerError::OutOfRange {
                index: slot,
                len: active,
            })
    }
}

/// Combines the per-team completion days of one work item: in every trial the
/// item is done once the slowest team is done.
pub(crate) fn merge_completion_days(states: &[&SimulationState], trials: usize) -> Histogram {
    (0..trials)
        .map(|trial| {
            states
                .iter()
                .filter_map(|state| state.completion_days().get(trial).copied())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sampler::RandomSampler;
    use crate::test_support::{SequenceSampler, team_with_throughput};

    fn group_with<'a>(team: &'a Team, remaining: &[usize]) -> TeamGroup<'a> {
        let mut group = TeamGroup::new(team);
        for (item, value) in remaining.iter().enumerate() {
            group.states.push(SimulationState::new(item, *value));
        }
        group
    }

    #[test]
    fn run_trials_records_one_outcome_per_trial() {
        let mut next = 0;
        let histogram = run_trials::<(), _>(6, || {
            next += 1;
            Ok(next % 2)
        })
        .unwrap();

        assert_eq!(histogram.total(), 6);
        assert_eq!(histogram.occurrences_of(0), 3);
        assert_eq!(histogram.occurrences_of(1), 3);
    }

    #[test]
    fn run_trials_stops_at_the_first_error() {
        let mut calls = 0;
        let result = run_trials(10, || {
            calls += 1;
            if calls == 3 { Err("boom") } else { Ok(1) }
        });

        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn sample_throughput_returns_count_of_the_drawn_day() {
        let history = ThroughputHistory::new(vec![4, 0, 7]);
        let mut sampler = SequenceSampler::new(&[2, 1, 0]);

        assert_eq!(sample_throughput(&history, &mut sampler), Ok(7));
        assert_eq!(sample_throughput(&history, &mut sampler), Ok(0));
        assert_eq!(sample_throughput(&history, &mut sampler), Ok(4));
        assert_eq!(sampler.requested_ranges, vec![2, 2, 2]);
    }

    #[test]
    fn sample_throughput_of_empty_history_fails() {
        let history = ThroughputHistory::default();
        let mut sampler = SequenceSampler::always(0);

        assert_eq!(
            sample_throughput(&history, &mut sampler),
            Err(SamplerError::NegativeRange(-1))
        );
    }

    #[test]
    fn single_item_with_one_item_per_day_finishes_on_its_remaining_count() {
        let team = team_with_throughput("Alpha", &[1], 1);
        let mut group = group_with(&team, &[5]);
        let mut sampler = RandomSampler::from_seed(Some(1));

        group.simulate(20, &mut sampler).unwrap();

        assert_eq!(group.states[0].completion_days(), &[5; 20]);
    }

    #[test]
    fn wip_of_one_works_items_in_caller_order() {
        let team = team_with_throughput("Alpha", &[1], 1);
        let mut group = group_with(&team, &[3, 2]);
        let mut sampler = RandomSampler::from_seed(Some(2));

        group.simulate(50, &mut sampler).unwrap();

        assert!(group.states[0].completion_days().iter().all(|day| *day == 3));
        assert!(group.states[1].completion_days().iter().all(|day| *day == 5));
    }

    #[test]
    fn wip_of_two_spreads_work_over_both_items() {
        let team = team_with_throughput("Alpha", &[1], 2);
        let mut group = group_with(&team, &[3, 2]);
        let mut sampler = RandomSampler::from_seed(Some(3));

        group.simulate(1_000, &mut sampler).unwrap();

        let first: Histogram = group.states[0].completion_days().iter().copied().collect();
        let second: Histogram = group.states[1].completion_days().iter().copied().collect();
        assert_eq!(first.min_outcome(), Some(3));
        assert_eq!(first.max_outcome(), Some(5));
        assert_eq!(second.min_outcome(), Some(2));
        assert_eq!(second.max_outcome(), Some(5));
        assert_eq!(first.total(), 1_000);
        assert_eq!(second.total(), 1_000);
    }

    #[test]
    fn slot_draws_are_bounded_by_wip_and_unfinished_items() {
        // history [2]: two items close per day
        let team = team_with_throughput("Alpha", &[2], 3);
        let mut group = group_with(&team, &[1, 1, 2, 1]);
        let mut sampler = SequenceSampler::always(0);

        group.simulate(1, &mut sampler).unwrap();

        // day 1: throughput, slot among 3, slot among 3
        // day 2: throughput, slot among 2, slot among 2
        // day 3: throughput, slot among 1
        assert_eq!(sampler.requested_ranges, vec![0, 2, 2, 0, 1, 1, 0, 0]);
        assert_eq!(group.states[0].completion_days(), &[1]);
        assert_eq!(group.states[1].completion_days(), &[1]);
        assert_eq!(group.states[2].completion_days(), &[2]);
        assert_eq!(group.states[3].completion_days(), &[3]);
    }

    #[test]
    fn slot_selects_position_within_active_window() {
        let team = team_with_throughput("Alpha", &[1], 2);
        let mut group = group_with(&team, &[1, 1, 1]);
        // day 1: throughput 0th day, slot 1 -> second item
        // day 2: throughput, slot 1 -> third item (second unfinished)
        // day 3: throughput, slot 0 -> first item
        let mut sampler = SequenceSampler::new(&[0, 1, 0, 1, 0, 0]);

        group.simulate(1, &mut sampler).unwrap();

        assert_eq!(group.states[0].completion_days(), &[3]);
        assert_eq!(group.states[1].completion_days(), &[1]);
        assert_eq!(group.states[2].completion_days(), &[2]);
    }

    #[test]
    fn days_without_throughput_still_advance_the_clock() {
        let team = team_with_throughput("Alpha", &[0, 3], 1);
        let mut group = group_with(&team, &[3]);
        let mut sampler = SequenceSampler::new(&[0, 0, 1]);

        group.simulate(1, &mut sampler).unwrap();

        assert_eq!(group.states[0].completion_days(), &[3]);
    }

    #[test]
    fn merge_completion_days_takes_the_latest_team_per_trial() {
        let mut alpha = SimulationState::new(0, 1);
        alpha.completion_days = vec![2, 7, 4];
        let mut beta = SimulationState::new(0, 1);
        beta.completion_days = vec![5, 3, 4];

        let histogram = merge_completion_days(&[&alpha, &beta], 3);

        assert_eq!(histogram.iter().collect::<Vec<_>>(), vec![(4, 1), (5, 1), (7, 1)]);
    }

    #[test]
    fn merge_completion_days_without_states_is_done_on_day_zero() {
        let histogram = merge_completion_days(&[], 4);
        assert_eq!(histogram.occurrences_of(0), 4);
    }
}
