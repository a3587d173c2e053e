pub mod agent;
pub mod completions;
pub mod config;
pub mod digest;
pub mod doctor;
pub mod export;
pub mod status;
