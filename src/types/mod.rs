pub mod config;
pub mod contractor;
pub mod report;
