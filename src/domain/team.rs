use crate::domain::throughput::ThroughputHistory;

/// A team's delivery context: its throughput run chart and how many work items
/// it works on at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub wip_limit: usize,
    pub throughput: ThroughputHistory,
}

impl Team {
    pub fn new(name: impl Into<String>, throughput: ThroughputHistory, wip_limit: usize) -> Self {
        Self {
            name: name.into(),
            wip_limit,
            throughput,
        }
    }

    /// A team that never completed anything cannot finish remaining work.
    pub fn has_throughput(&self) -> bool {
        self.throughput.total() > 0
    }
}
