//! Monte Carlo forecasts over historical team throughput: how many items get
//! done in a period, and when remaining work items will be done.

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
