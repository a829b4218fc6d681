use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use thiserror::Error;

use crate::domain::team::Team;
use crate::domain::throughput::ThroughputHistory;
use crate::domain::work_item::WorkItem;
use crate::services::forecast::{HowManyForecast, WhenForecast};
use crate::services::sampler::{RandomSampler, Sampler, SamplerError};
use crate::services::simulation_engine::{
    SimulationState, TeamGroup, merge_completion_days, run_trials, sample_throughput,
};

pub const DEFAULT_TRIALS: usize = 10_000;

const AD_HOC_TEAM: &str = "ad-hoc";
const AD_HOC_ITEM: &str = "remaining-items";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    #[error("number of trials must be greater than zero")]
    InvalidTrials,
    #[error("insufficient history: no throughput data")]
    EmptyHistory,
    #[error("insufficient history: team {team} has no throughput data")]
    InsufficientHistory { team: String },
    #[error("wip limit of team {team} must be at least 1")]
    InvalidWipLimit { team: String },
    #[error("team {0} is defined more than once")]
    DuplicateTeam(String),
    #[error("work item {0} is defined more than once")]
    DuplicateWorkItem(String),
    #[error("work item {item} references unknown team {team}")]
    UnknownTeam { item: String, team: String },
    #[error("sampler failed: {0}")]
    Sampler(#[from] SamplerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastConfig {
    pub trials: usize,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

/// Monte Carlo forecasts over historical throughput.
pub struct ForecastService<S: Sampler> {
    sampler: S,
    trials: usize,
}

impl ForecastService<RandomSampler<StdRng>> {
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        Self::with_sampler(RandomSampler::from_seed(config.seed), config.trials)
    }
}

impl<S: Sampler> ForecastService<S> {
    pub fn with_sampler(sampler: S, trials: usize) -> Result<Self, ForecastError> {
        if trials == 0 {
            return Err(ForecastError::InvalidTrials);
        }
        Ok(Self { sampler, trials })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// How many items get done in the next `days` days.
    pub fn how_many(
        &mut self,
        throughput: &ThroughputHistory,
        days: usize,
    ) -> Result<HowManyForecast, ForecastError> {
        if throughput.is_empty() {
            return Err(ForecastError::EmptyHistory);
        }
        info!("Running Monte Carlo forecast how many for {days} days");

        let sampler = &mut self.sampler;
        let histogram = run_trials(self.trials, || {
            let mut total = 0;
            for _ in 0..days {
                total += sample_throughput(throughput, &mut *sampler)?;
            }
            Ok::<usize, SamplerError>(total)
        })?;

        info!("Finished Monte Carlo forecast how many for {days} days");
        Ok(HowManyForecast::new(histogram, days))
    }

    /// When `remaining_items` items of a single team will be done.
    pub fn when(
        &mut self,
        throughput: &ThroughputHistory,
        remaining_items: usize,
    ) -> Result<WhenForecast, ForecastError> {
        if throughput.is_empty() {
            return Err(ForecastError::EmptyHistory);
        }
        info!("Running Monte Carlo forecast when for {remaining_items} items");

        let team = Team::new(AD_HOC_TEAM, throughput.clone(), 1);
        let item =
            WorkItem::new(AD_HOC_ITEM).with_work(AD_HOC_TEAM, remaining_items, remaining_items);
        let mut forecasts =
            self.forecast_items(std::slice::from_ref(&team), std::slice::from_ref(&item))?;

        info!("Finished Monte Carlo forecast when for {remaining_items} items");
        Ok(forecasts.remove(AD_HOC_ITEM).unwrap_or_default())
    }

    /// Forecasts every work item, honoring each team's WIP limit. Items are
    /// worked on in the order given.
    pub fn forecast_items(
        &mut self,
        teams: &[Team],
        items: &[WorkItem],
    ) -> Result<HashMap<String, WhenForecast>, ForecastError> {
        let teams_by_name = index_teams(teams)?;
        let mut groups = build_team_groups(&teams_by_name, items)?;

        for group in &mut groups {
            if !group.team.has_throughput() {
                warn!(
                    "Team {} has no completed items in its history, skipping {} work items",
                    group.team.name,
                    group.states.len()
                );
                continue;
            }
            debug!(
                "Simulating {} work items for team {} with wip {}",
                group.states.len(),
                group.team.name,
                group.team.wip_limit
            );
            group.simulate(self.trials, &mut self.sampler)?;
        }

        let mut forecasts = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let forecast = self.aggregate_item_forecast(index, item, &groups);
            forecasts.insert(item.id.clone(), forecast);
        }
        Ok(forecasts)
    }

    fn aggregate_item_forecast(
        &self,
        index: usize,
        item: &WorkItem,
        groups: &[TeamGroup<'_>],
    ) -> WhenForecast {
        if item.is_complete() {
            return WhenForecast::completed(self.trials);
        }

        let mut states = Vec::new();
        for group in groups {
            for state in group.states.iter().filter(|state| state.item == index) {
                if !group.team.has_throughput() {
                    return WhenForecast::default();
                }
                states.push(state);
            }
        }

        WhenForecast::new(merge_completion_days(&states, self.trials))
    }
}

fn index_teams(teams: &[Team]) -> Result<HashMap<&str, &Team>, ForecastError> {
    let mut teams_by_name = HashMap::with_capacity(teams.len());
    for team in teams {
        if team.throughput.is_empty() {
            return Err(ForecastError::InsufficientHistory {
                team: team.name.clone(),
            });
        }
        if team.wip_limit == 0 {
            return Err(ForecastError::InvalidWipLimit {
                team: team.name.clone(),
            });
        }
        if teams_by_name.insert(team.name.as_str(), team).is_some() {
            return Err(ForecastError::DuplicateTeam(team.name.clone()));
        }
    }
    Ok(teams_by_name)
}

/// One group per team in order of first use; work with nothing remaining is left out.
fn build_team_groups<'a>(
    teams_by_name: &HashMap<&str, &'a Team>,
    items: &[WorkItem],
) -> Result<Vec<TeamGroup<'a>>, ForecastError> {
    let mut groups: Vec<TeamGroup<'a>> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut seen_items = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if !seen_items.insert(item.id.as_str()) {
            return Err(ForecastError::DuplicateWorkItem(item.id.clone()));
        }

        for work in &item.work {
            let team: &'a Team = *teams_by_name
                .get(work.team.as_str())
                .ok_or_else(|| ForecastError::UnknownTeam {
                    item: item.id.clone(),
                    team: work.team.clone(),
                })?;
            if work.remaining == 0 {
                continue;
            }

            let position = *group_index.entry(team.name.as_str()).or_insert_with(|| {
                groups.push(TeamGroup::new(team));
                groups.len() - 1
            });
            groups[position]
                .states
                .push(SimulationState::new(index, work.remaining));
        }
    }

    Ok(groups)
}
