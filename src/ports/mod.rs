//! Port traits at the seams of the pipeline.

pub mod config_port;
pub mod data_port;
pub mod report_port;
