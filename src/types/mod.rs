pub mod config;
pub mod rating;
pub mod report;
