use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::portfolio::Portfolio;
use crate::domain::team::Team;
use crate::domain::work_item::{TeamWork, WorkItem};
use crate::services::throughput_yaml::{ThroughputYamlError, load_throughput_history};

#[derive(Error, Debug)]
pub enum WorkItemsYamlError {
    #[error("failed to read work items yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse work items yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing team name")]
    MissingTeamName,
    #[error("missing work item id")]
    MissingWorkItemId,
    #[error("failed to load throughput of team {team} from {path}: {source}")]
    Throughput {
        team: String,
        path: PathBuf,
        source: ThroughputYamlError,
    },
}

#[derive(Debug, Deserialize)]
struct PortfolioRecord {
    name: Option<String>,
    teams: Vec<TeamRecord>,
    #[serde(default)]
    work_items: Vec<WorkItemRecord>,
}

#[derive(Debug, Deserialize)]
struct TeamRecord {
    name: String,
    #[serde(default = "default_wip")]
    wip: usize,
    throughput: String,
}

#[derive(Debug, Deserialize)]
struct WorkItemRecord {
    id: String,
    name: Option<String>,
    #[serde(default)]
    work: Vec<TeamWorkRecord>,
}

#[derive(Debug, Deserialize)]
struct TeamWorkRecord {
    team: String,
    remaining: usize,
    total: Option<usize>,
}

fn default_wip() -> usize {
    1
}

/// Loads teams and work items from `path`. Team throughput files are resolved
/// relative to the directory of `path`.
pub fn load_portfolio_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<Portfolio, WorkItemsYamlError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| WorkItemsYamlError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    deserialize_portfolio_from_yaml_str(&contents, base_dir)
}

pub fn deserialize_portfolio_from_yaml_str(
    input: &str,
    base_dir: &Path,
) -> Result<Portfolio, WorkItemsYamlError> {
    let record: PortfolioRecord = serde_yaml::from_str(input)?;

    let mut teams = Vec::with_capacity(record.teams.len());
    for team_record in record.teams {
        if team_record.name.trim().is_empty() {
            return Err(WorkItemsYamlError::MissingTeamName);
        }
        let throughput_path = base_dir.join(&team_record.throughput);
        let throughput = load_throughput_history(&throughput_path).map_err(|source| {
            WorkItemsYamlError::Throughput {
                team: team_record.name.clone(),
                path: throughput_path.clone(),
                source,
            }
        })?;
        teams.push(Team::new(team_record.name, throughput, team_record.wip));
    }

    let mut work_items = Vec::with_capacity(record.work_items.len());
    for item_record in record.work_items {
        if item_record.id.trim().is_empty() {
            return Err(WorkItemsYamlError::MissingWorkItemId);
        }
        work_items.push(WorkItem {
            id: item_record.id,
            name: item_record.name,
            work: item_record
                .work
                .into_iter()
                .map(|work| TeamWork {
                    total: work.total.unwrap_or(work.remaining),
                    team: work.team,
                    remaining: work.remaining,
                })
                .collect(),
        });
    }

    Ok(Portfolio {
        name: record.name,
        teams,
        work_items,
    })
}
