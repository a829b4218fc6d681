/// The share of a work item that one team still has to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWork {
    pub team: String,
    pub remaining: usize,
    pub total: usize,
}

/// An item to forecast, e.g. a feature or epic spread over one or more teams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkItem {
    pub id: String,
    pub name: Option<String>,
    pub work: Vec<TeamWork>,
}

impl WorkItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_work(mut self, team: impl Into<String>, remaining: usize, total: usize) -> Self {
        self.work.push(TeamWork {
            team: team.into(),
            remaining,
            total,
        });
        self
    }

    pub fn remaining_work(&self) -> usize {
        self.work.iter().map(|work| work.remaining).sum()
    }

    pub fn total_work(&self) -> usize {
        self.work.iter().map(|work| work.total).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_work() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_without_remaining_work_is_complete() {
        let item = WorkItem::new("F-1")
            .with_work("Alpha", 0, 5)
            .with_work("Beta", 0, 2);

        assert!(item.is_complete());
        assert_eq!(item.total_work(), 7);
    }

    #[test]
    fn item_without_any_team_is_complete() {
        assert!(WorkItem::new("F-2").is_complete());
    }

    #[test]
    fn remaining_work_sums_all_teams() {
        let item = WorkItem::new("F-3")
            .with_work("Alpha", 3, 5)
            .with_work("Beta", 1, 2);

        assert!(!item.is_complete());
        assert_eq!(item.remaining_work(), 4);
    }
}
