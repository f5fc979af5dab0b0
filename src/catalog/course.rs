// src/catalog/course.rs

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Deserialize;

/// Course identifier as written in the catalog (e.g. `"CS 101"`).
pub type CourseCode = String;

/// Academic term season a course can be offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Fall,
    Spring,
    Summer,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// A single course in the catalog.
///
/// Identity is the course code: equality, hashing and ordering ignore every
/// other field, so a `BTreeSet<Course>` deduplicates by code and can be
/// queried with a `&str`.
#[derive(Debug, Clone)]
pub struct Course {
    pub code: CourseCode,
    pub credits: u32,
    pub prerequisites: BTreeSet<CourseCode>,
    pub corequisites: BTreeSet<CourseCode>,
    /// Seasons the course runs in. Empty means "every term".
    pub offered: BTreeSet<Season>,
}

impl Course {
    pub fn new(code: impl Into<CourseCode>, credits: u32) -> Self {
        Self {
            code: code.into(),
            credits,
            prerequisites: BTreeSet::new(),
            corequisites: BTreeSet::new(),
            offered: BTreeSet::new(),
        }
    }

    pub fn with_prerequisite(mut self, code: impl Into<CourseCode>) -> Self {
        self.prerequisites.insert(code.into());
        self
    }

    pub fn with_corequisite(mut self, code: impl Into<CourseCode>) -> Self {
        self.corequisites.insert(code.into());
        self
    }

    pub fn offered_in(mut self, season: Season) -> Self {
        self.offered.insert(season);
        self
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl Borrow<str> for Course {
    fn borrow(&self) -> &str {
        &self.code
    }
}

/// Every course known to a planning run, keyed by code.
///
/// The graph builder looks prerequisites and corequisites up here, so it
/// must contain every course any requirement can reach.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: BTreeMap<CourseCode, Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course, replacing any previous entry with the same code.
    pub fn insert(&mut self, course: Course) {
        self.courses.insert(course.code.clone(), course);
    }

    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for course in iter {
            catalog.insert(course);
        }
        catalog
    }
}
