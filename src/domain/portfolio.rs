use crate::domain::team::Team;
use crate::domain::work_item::WorkItem;

/// Teams and the work items they deliver, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub name: Option<String>,
    pub teams: Vec<Team>,
    pub work_items: Vec<WorkItem>,
}
