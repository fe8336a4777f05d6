pub mod config;
mod database;
mod repository;
mod service;
mod service_provider;
pub mod session;
pub mod telemetry;
pub mod templates;

pub use service_provider::ServiceProvider;
