pub mod classifier;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod store;
