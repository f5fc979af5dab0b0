// src/plan/scheduler.rs

//! Greedy semester packing.
//!
//! Courses are taken in topological order and packed into the current
//! semester until the credit ceiling is hit. A course is eligible only once
//! all of its requisites are finished in an earlier semester (corequisites
//! may share the semester under [`CorequisitePolicy::SameTerm`]).
//!
//! Each pass scans the remaining courses front to back:
//! - an eligible course that fits is appended and the scan continues;
//! - an eligible course that does not fit closes the semester, opens a new
//!   one holding just that course, and restarts the scan;
//! - a pass that ends without overflowing closes the semester.
//!
//! The first course of an empty semester is never refused, so a course worth
//! more than the ceiling still gets a semester of its own.

use std::collections::HashSet;
use std::mem;

use tracing::{debug, info};

use crate::catalog::CourseCode;
use crate::dag::{DependencyGraph, EdgeKind};
use crate::errors::{PlanError, Result};
use crate::types::CorequisitePolicy;

/// One term's worth of courses, in the order they were placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Semester {
    courses: Vec<CourseCode>,
    credits: u32,
}

impl Semester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: impl Into<CourseCode>, credits: u32) {
        self.courses.push(code.into());
        self.credits = self.credits.saturating_add(credits);
    }

    pub fn courses(&self) -> &[CourseCode] {
        &self.courses
    }

    /// Running credit total.
    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn contains(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c == code)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Pack `order` into semesters of at most `credit_limit` credits.
///
/// `order` must be a topological order of `graph` (see
/// [`crate::dag::topological_order`]); courses repeated in it are placed once.
pub fn schedule(
    graph: &DependencyGraph,
    order: &[CourseCode],
    credit_limit: i64,
    policy: CorequisitePolicy,
) -> Result<Vec<Semester>> {
    let limit = match u64::try_from(credit_limit) {
        Ok(limit) if limit > 0 => limit,
        _ => return Err(PlanError::InvalidCreditLimit(credit_limit)),
    };

    let mut remaining: Vec<&str> = order.iter().map(|c| c.as_str()).collect();
    let mut taken: HashSet<&str> = HashSet::new();
    let mut semesters: Vec<Semester> = Vec::new();
    let mut current = Semester::new();

    while !remaining.is_empty() {
        let mut overflow = false;
        let mut idx = 0;

        while idx < remaining.len() {
            let code = remaining[idx];

            if taken.contains(code) {
                remaining.remove(idx);
                continue;
            }

            if !is_eligible(graph, code, &taken, &current, policy) {
                idx += 1;
                continue;
            }

            let credits = graph
                .credits_of(code)
                .ok_or_else(|| PlanError::UnknownCourse {
                    course: code.to_string(),
                    referenced_by: "the course order".to_string(),
                })?;

            let would_be = u64::from(current.credits()) + u64::from(credits);
            remaining.remove(idx);
            taken.insert(code);

            if !current.is_empty() && would_be > limit {
                overflow = true;
                close_semester(&mut semesters, &mut current);
                current.push(code, credits);
                break;
            }

            current.push(code, credits);
        }

        if !overflow {
            if current.is_empty() {
                if remaining.is_empty() {
                    break;
                }
                return Err(PlanError::Unschedulable {
                    remaining: remaining.iter().map(|c| c.to_string()).collect(),
                });
            }
            close_semester(&mut semesters, &mut current);
        }
    }

    if !current.is_empty() {
        close_semester(&mut semesters, &mut current);
    }

    info!(
        semesters = semesters.len(),
        courses = taken.len(),
        credit_limit,
        "schedule complete"
    );
    Ok(semesters)
}

fn is_eligible(
    graph: &DependencyGraph,
    code: &str,
    taken: &HashSet<&str>,
    current: &Semester,
    policy: CorequisitePolicy,
) -> bool {
    graph.predecessors(code).into_iter().all(|(before, kind)| {
        match (kind, policy) {
            (EdgeKind::Corequisite, CorequisitePolicy::SameTerm) => taken.contains(before),
            _ => taken.contains(before) && !current.contains(before),
        }
    })
}

fn close_semester(semesters: &mut Vec<Semester>, current: &mut Semester) {
    let semester = mem::take(current);
    debug!(
        index = semesters.len(),
        courses = ?semester.courses(),
        credits = semester.credits(),
        "semester closed"
    );
    semesters.push(semester);
}
