// src/catalog/requirement.rs

use std::fmt;

use crate::catalog::course::Course;

/// A unit of degree obligation: a single course, or a group of alternatives.
#[derive(Debug, Clone)]
pub enum Requirement {
    Course(Course),
    Group(CourseGroup),
}

impl Requirement {
    /// Credits this requirement is worth when satisfied.
    ///
    /// A course is worth its own credits; a group is worth the minimum it
    /// demands.
    pub fn credit_value(&self) -> u32 {
        match self {
            Requirement::Course(course) => course.credits,
            Requirement::Group(group) => group.min_credits,
        }
    }
}

impl From<Course> for Requirement {
    fn from(course: Course) -> Self {
        Requirement::Course(course)
    }
}

impl From<CourseGroup> for Requirement {
    fn from(group: CourseGroup) -> Self {
        Requirement::Group(group)
    }
}

/// "Pick enough of these to reach `min_credits`."
#[derive(Debug, Clone)]
pub struct CourseGroup {
    /// Optional label used in diagnostics (e.g. `"systems elective"`).
    pub name: Option<String>,
    pub min_credits: u32,
    pub options: Vec<Requirement>,
}

impl CourseGroup {
    pub fn new(min_credits: u32) -> Self {
        Self {
            name: None,
            min_credits,
            options: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_option(mut self, option: impl Into<Requirement>) -> Self {
        self.options.push(option.into());
        self
    }
}

impl fmt::Display for CourseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.name {
            return write!(f, "'{name}'");
        }

        write!(f, "[{} credits of: ", self.min_credits)?;
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match option {
                Requirement::Course(course) => f.write_str(&course.code)?,
                Requirement::Group(group) => write!(f, "{group}")?,
            }
        }
        f.write_str("]")
    }
}

/// A named bundle of top-level requirements (a major, minor, track...).
#[derive(Debug, Clone)]
pub struct Curriculum {
    pub name: String,
    pub requirements: Vec<Requirement>,
}

impl Curriculum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirements: Vec::new(),
        }
    }

    pub fn with_requirement(mut self, requirement: impl Into<Requirement>) -> Self {
        self.requirements.push(requirement.into());
        self
    }
}
