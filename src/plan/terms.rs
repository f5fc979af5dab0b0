// src/plan/terms.rs

//! Term labels ("Fall 2025", "Spring 2026", ...) for scheduled semesters.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::catalog::Season;
use crate::errors::{PlanError, Result};
use crate::plan::scheduler::Semester;
use crate::plan::{Plan, PlannedTerm};

/// An academic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub season: Season,
    pub year: i32,
}

impl Term {
    pub fn new(season: Season, year: i32) -> Self {
        Self { season, year }
    }

    /// First term a plan made on `reference` should start in.
    ///
    /// Before March (`month + 5 < 8`) the current academic year is still in
    /// its spring term and the plan starts the coming fall; from March on it
    /// starts the fall of the following year.
    pub fn starting_from(reference: NaiveDate) -> Self {
        let year = if reference.month() + 5 < 8 {
            reference.year()
        } else {
            reference.year() + 1
        };
        Term::new(Season::Fall, year)
    }

    /// The regular term after this one, or `None` if the year overflows.
    ///
    /// Plans alternate fall and spring; summer and winter terms lead into the
    /// next regular term.
    pub fn next(self) -> Option<Self> {
        match self.season {
            Season::Fall => Some(Term::new(Season::Spring, self.year.checked_add(1)?)),
            Season::Spring | Season::Summer => Some(Term::new(Season::Fall, self.year)),
            Season::Winter => Some(Term::new(Season::Spring, self.year)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

/// Unbounded alternating sequence of terms.
#[derive(Debug, Clone)]
pub struct TermSequence {
    next: Option<Term>,
}

impl TermSequence {
    pub fn starting_at(term: Term) -> Self {
        Self { next: Some(term) }
    }

    pub fn from_reference_date(reference: NaiveDate) -> Self {
        Self::starting_at(Term::starting_from(reference))
    }
}

impl Iterator for TermSequence {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        let term = self.next?;
        self.next = term.next();
        Some(term)
    }
}

/// Pair each semester with its term, in order, starting from the term
/// implied by `reference`.
pub fn label(semesters: Vec<Semester>, reference: NaiveDate) -> Result<Plan> {
    let needed = semesters.len();
    let terms: Vec<Term> = TermSequence::from_reference_date(reference)
        .take(needed)
        .collect();

    if terms.len() < needed {
        return Err(PlanError::LabelExhaustion {
            semesters: needed,
            labels: terms.len(),
        });
    }

    if let Some(first) = terms.first() {
        debug!(%reference, first_term = %first, semesters = needed, "labelling semesters");
    }

    let terms = terms
        .into_iter()
        .zip(semesters)
        .map(|(term, semester)| PlannedTerm { term, semester })
        .collect();

    Ok(Plan::new(terms))
}
