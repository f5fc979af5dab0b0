// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::{Catalog, Curriculum, Season};
use crate::errors::{PlanError, Result};
use crate::plan::PlanOptions;
use crate::types::{CorequisitePolicy, SelectionPolicy};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [planner]
/// credit_limit = 16
/// selection = "random"
/// seed = 7
///
/// [course."CS 101"]
/// credits = 3
///
/// [course."CS 201"]
/// credits = 3
/// prerequisites = ["CS 101"]
/// offered = ["fall"]
///
/// [curriculum.computer-science]
/// requirements = [
///   "CS 101",
///   { name = "core", min_credits = 3, options = ["CS 201"] },
/// ]
/// ```
///
/// This is the unchecked form; convert it with `ConfigFile::try_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Planner knobs from `[planner]`.
    #[serde(default)]
    pub planner: PlannerSection,

    /// Course catalog from `[course.<code>]`.
    #[serde(default)]
    pub course: BTreeMap<String, CourseConfig>,

    /// Curricula from `[curriculum.<name>]`.
    #[serde(default)]
    pub curriculum: BTreeMap<String, CurriculumConfig>,
}

/// `[planner]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerSection {
    /// Maximum credits per term.
    #[serde(default = "default_credit_limit")]
    pub credit_limit: i64,

    /// Reject plans whose expanded course graph is larger than this.
    #[serde(default = "default_max_courses")]
    pub max_courses: usize,

    /// `"random"`, `"smallest-first"` or `"largest-first"`.
    #[serde(default)]
    pub selection: SelectionPolicy,

    /// Seed for random elective selection. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// `"strict"` or `"same-term"`.
    #[serde(default)]
    pub corequisites: CorequisitePolicy,

    /// Regex every course code must match, e.g. `"^[A-Z]+ [0-9]{3}$"`.
    #[serde(default)]
    pub code_pattern: Option<String>,

    /// Courses already taken.
    #[serde(default)]
    pub completed: Vec<String>,
}

fn default_credit_limit() -> i64 {
    16
}

fn default_max_courses() -> usize {
    256
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            credit_limit: default_credit_limit(),
            max_courses: default_max_courses(),
            selection: SelectionPolicy::default(),
            seed: None,
            corequisites: CorequisitePolicy::default(),
            code_pattern: None,
            completed: Vec::new(),
        }
    }
}

/// `[course.<code>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    pub credits: u32,

    #[serde(default)]
    pub prerequisites: Vec<String>,

    #[serde(default)]
    pub corequisites: Vec<String>,

    /// Seasons the course runs in; empty means every term.
    #[serde(default)]
    pub offered: Vec<Season>,
}

/// `[curriculum.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumConfig {
    #[serde(default)]
    pub requirements: Vec<RequirementConfig>,
}

/// A requirement entry: either a bare course code or an inline group table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequirementConfig {
    Course(String),
    Group {
        #[serde(default)]
        name: Option<String>,
        min_credits: u32,
        options: Vec<RequirementConfig>,
    },
}

/// Validated configuration with the catalog and curricula already built.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub planner: PlannerSection,
    pub catalog: Catalog,
    pub curricula: Vec<Curriculum>,
}

impl ConfigFile {
    /// Assemble from already-validated parts. Prefer `ConfigFile::try_from`.
    pub fn new_unchecked(
        planner: PlannerSection,
        catalog: Catalog,
        curricula: Vec<Curriculum>,
    ) -> Self {
        Self {
            planner,
            catalog,
            curricula,
        }
    }

    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            credit_limit: self.planner.credit_limit,
            max_courses: self.planner.max_courses,
            selection: self.planner.selection,
            corequisites: self.planner.corequisites,
        }
    }

    /// Curricula with the given names, in the order asked for.
    ///
    /// An empty `names` slice selects every curriculum.
    pub fn select_curricula(&self, names: &[String]) -> Result<Vec<Curriculum>> {
        if names.is_empty() {
            return Ok(self.curricula.clone());
        }

        names
            .iter()
            .map(|name| {
                self.curricula
                    .iter()
                    .find(|c| &c.name == name)
                    .cloned()
                    .ok_or_else(|| {
                        PlanError::ConfigError(format!("unknown curriculum '{name}'"))
                    })
            })
            .collect()
    }
}
