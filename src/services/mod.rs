pub mod aggregation;
pub mod cost_plot;
pub mod preview;
pub mod pricing;
pub mod proposal_yaml;
pub mod report_yaml;
