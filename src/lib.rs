pub mod app;
pub mod app_state;
pub mod check;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod presenter;
pub mod telemetry;
