// Library exports for integration tests and external use

pub mod api;
pub mod app_data;
pub mod config;
pub mod errors;
pub mod pagination;
pub mod stores;
pub mod types;
pub mod ui;
pub mod validation;
