pub mod histogram;
pub mod portfolio;
pub mod team;
pub mod throughput;
pub mod work_item;
