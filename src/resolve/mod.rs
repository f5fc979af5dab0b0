// src/resolve/mod.rs

//! Requirement resolution: turn requirement trees into a flat course set.
//!
//! Course groups are satisfied by picking children until their credit
//! threshold is reached. Which children get picked is decided by a
//! [`SelectionPolicy`]; the random policy draws from a caller-supplied
//! [`Rng`], so a seeded generator gives reproducible plans and there is no
//! process-wide random state.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::catalog::{Course, CourseGroup, Curriculum, Requirement};
use crate::errors::{PlanError, Result};
use crate::types::SelectionPolicy;

/// Resolves requirements into concrete courses.
#[derive(Debug)]
pub struct Resolver<R> {
    policy: SelectionPolicy,
    rng: R,
}

impl<R: Rng> Resolver<R> {
    pub fn new(policy: SelectionPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    /// Resolve every requirement and union the results.
    pub fn resolve(&mut self, requirements: &[Requirement]) -> Result<BTreeSet<Course>> {
        let mut courses = BTreeSet::new();
        for requirement in requirements {
            courses.extend(self.resolve_one(requirement)?);
        }
        Ok(courses)
    }

    /// Union of the resolved course sets of every top-level requirement of
    /// every curriculum, deduplicated by course code.
    pub fn build_requirements(&mut self, curricula: &[Curriculum]) -> Result<BTreeSet<Course>> {
        let mut courses = BTreeSet::new();
        for curriculum in curricula {
            let resolved = self.resolve(&curriculum.requirements)?;
            debug!(
                curriculum = %curriculum.name,
                courses = resolved.len(),
                "resolved curriculum requirements"
            );
            courses.extend(resolved);
        }
        Ok(courses)
    }

    fn resolve_one(&mut self, requirement: &Requirement) -> Result<BTreeSet<Course>> {
        match requirement {
            Requirement::Course(course) => Ok(BTreeSet::from([course.clone()])),
            Requirement::Group(group) => self.resolve_group(group),
        }
    }

    fn resolve_group(&mut self, group: &CourseGroup) -> Result<BTreeSet<Course>> {
        let mut selected = BTreeSet::new();
        let mut total: u32 = 0;

        for idx in self.selection_order(group) {
            if total >= group.min_credits {
                break;
            }

            // Only credits a child adds to the selection count, so two
            // options sharing a course do not satisfy the group twice.
            for course in self.resolve_one(&group.options[idx])? {
                let credits = course.credits;
                if selected.insert(course) {
                    total = total.saturating_add(credits);
                }
            }
        }

        if total < group.min_credits {
            return Err(PlanError::UnsatisfiableGroup {
                group: group.to_string(),
                required: group.min_credits,
                available: total,
            });
        }

        debug!(
            group = %group,
            selected = selected.len(),
            credits = total,
            "course group satisfied"
        );
        Ok(selected)
    }

    /// Order in which a group's children are considered.
    fn selection_order(&mut self, group: &CourseGroup) -> Vec<usize> {
        let mut order: Vec<usize> = (0..group.options.len()).collect();
        match self.policy {
            SelectionPolicy::Random => order.shuffle(&mut self.rng),
            SelectionPolicy::SmallestFirst => {
                order.sort_by_key(|&i| group.options[i].credit_value())
            }
            SelectionPolicy::LargestFirst => {
                order.sort_by_key(|&i| Reverse(group.options[i].credit_value()))
            }
        }
        order
    }
}
