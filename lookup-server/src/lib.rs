pub mod adapters;
pub mod app_config;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod retry;
pub mod utils;
