// ABOUTME: Library entry point for the job-scrape API server.
// ABOUTME: Exposes the router builder and configuration for the binary and tests.

pub mod app;
pub mod config;

pub use app::{build_app, AppState};
pub use config::Config;
