use std::str::FromStr;

use serde::Deserialize;

/// How a course group picks which of its children to satisfy itself with.
///
/// - `Random`: uniform choice without replacement from the injected random
///   source (default; two runs may pick different electives).
/// - `SmallestFirst` / `LargestFirst`: deterministic, ordered by each child's
///   credit value, ties kept in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    Random,
    SmallestFirst,
    LargestFirst,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::Random
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(SelectionPolicy::Random),
            "smallest-first" => Ok(SelectionPolicy::SmallestFirst),
            "largest-first" => Ok(SelectionPolicy::LargestFirst),
            other => Err(format!(
                "invalid selection policy: {other} (expected \"random\", \"smallest-first\" or \"largest-first\")"
            )),
        }
    }
}

/// Where a corequisite may sit relative to the course that names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorequisitePolicy {
    /// Treated like a prerequisite: completed in a strictly earlier term.
    Strict,
    /// Completed in an earlier term or taken in the same term.
    SameTerm,
}

impl Default for CorequisitePolicy {
    fn default() -> Self {
        CorequisitePolicy::Strict
    }
}

impl FromStr for CorequisitePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(CorequisitePolicy::Strict),
            "same-term" => Ok(CorequisitePolicy::SameTerm),
            other => Err(format!(
                "invalid corequisite policy: {other} (expected \"strict\" or \"same-term\")"
            )),
        }
    }
}
