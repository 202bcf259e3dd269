pub mod config;
pub mod export;
pub mod logging;
pub mod types;
