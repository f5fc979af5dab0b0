// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::catalog::CourseCode;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unknown course '{course}' referenced by {referenced_by}")]
    UnknownCourse {
        course: CourseCode,
        referenced_by: String,
    },

    #[error(
        "Course group {group} cannot be satisfied: requires {required} credits, only {available} available"
    )]
    UnsatisfiableGroup {
        group: String,
        required: u32,
        available: u32,
    },

    #[error("Cycle detected in course dependencies involving: {}", .members.join(", "))]
    Cycle { members: Vec<CourseCode> },

    #[error("Invalid credit limit {0}: must be greater than zero")]
    InvalidCreditLimit(i64),

    #[error("Term labels exhausted: {semesters} semesters but only {labels} labels")]
    LabelExhaustion { semesters: usize, labels: usize },

    #[error("Plan too large: {count} courses exceeds the configured maximum of {max}")]
    TooManyCourses { count: usize, max: usize },

    #[error("No course can be scheduled; still waiting: {}", .remaining.join(", "))]
    Unschedulable { remaining: Vec<CourseCode> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
