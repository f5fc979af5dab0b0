// src/config/mod.rs

//! Configuration loading and validation for courseplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate references and build the catalog and curricula (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_from_str};
pub use model::{
    ConfigFile, CourseConfig, CurriculumConfig, PlannerSection, RawConfigFile, RequirementConfig,
};
