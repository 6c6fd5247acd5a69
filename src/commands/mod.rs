pub mod base_commands;
pub mod calculate_cmd;
pub mod plot_costs_cmd;
pub mod preview_cmd;
pub mod report_format;
