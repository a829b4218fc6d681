pub mod forecast;
pub mod forecast_report;
pub mod forecast_service;
pub mod histogram_plot;
pub mod percentiles;
pub mod sampler;
pub mod simulation_engine;
pub mod throughput_yaml;
pub mod work_items_yaml;
