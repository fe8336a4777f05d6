//! Domain model of the provisioning portal: requests, drafts, validation rules
//! and the repository/service seams implemented by the outer crates.

pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod rule;
pub mod service;
