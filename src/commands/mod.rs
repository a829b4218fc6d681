pub mod base_commands;
pub mod completions_cmd;
pub mod forecast_work_items_cmd;
pub mod how_many_cmd;
pub mod report_format;
pub mod report_output;
pub mod when_cmd;
