pub mod proposal;
pub mod service;
