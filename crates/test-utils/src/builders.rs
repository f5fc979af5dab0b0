#![allow(dead_code)]

use std::collections::BTreeMap;

use courseplan::catalog::{Catalog, Course};
use courseplan::config::{
    ConfigFile, CourseConfig, CurriculumConfig, PlannerSection, RawConfigFile, RequirementConfig,
};
use courseplan::types::{CorequisitePolicy, SelectionPolicy};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                planner: PlannerSection::default(),
                course: BTreeMap::new(),
                curriculum: BTreeMap::new(),
            },
        }
    }

    pub fn with_course(mut self, code: &str, course: CourseConfig) -> Self {
        self.config.course.insert(code.to_string(), course);
        self
    }

    pub fn with_curriculum(mut self, name: &str, requirements: Vec<RequirementConfig>) -> Self {
        self.config
            .curriculum
            .insert(name.to_string(), CurriculumConfig { requirements });
        self
    }

    pub fn credit_limit(mut self, limit: i64) -> Self {
        self.config.planner.credit_limit = limit;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.planner.seed = Some(seed);
        self
    }

    pub fn selection(mut self, policy: SelectionPolicy) -> Self {
        self.config.planner.selection = policy;
        self
    }

    pub fn corequisites(mut self, policy: CorequisitePolicy) -> Self {
        self.config.planner.corequisites = policy;
        self
    }

    pub fn completed(mut self, code: &str) -> Self {
        self.config.planner.completed.push(code.to_string());
        self
    }

    /// The unchecked config, for tests that exercise validation failures.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CourseConfig`.
pub struct CourseConfigBuilder {
    course: CourseConfig,
}

impl CourseConfigBuilder {
    pub fn new(credits: u32) -> Self {
        Self {
            course: CourseConfig {
                credits,
                prerequisites: vec![],
                corequisites: vec![],
                offered: vec![],
            },
        }
    }

    pub fn prerequisite(mut self, code: &str) -> Self {
        self.course.prerequisites.push(code.to_string());
        self
    }

    pub fn corequisite(mut self, code: &str) -> Self {
        self.course.corequisites.push(code.to_string());
        self
    }

    pub fn build(self) -> CourseConfig {
        self.course
    }
}

/// Requirement entry naming a single course.
pub fn req(code: &str) -> RequirementConfig {
    RequirementConfig::Course(code.to_string())
}

/// Requirement entry for an unnamed group of course codes.
pub fn group(min_credits: u32, codes: &[&str]) -> RequirementConfig {
    RequirementConfig::Group {
        name: None,
        min_credits,
        options: codes.iter().map(|c| req(c)).collect(),
    }
}

/// Catalog holding exactly `courses`.
pub fn catalog_of(courses: &[Course]) -> Catalog {
    courses.iter().cloned().collect()
}
