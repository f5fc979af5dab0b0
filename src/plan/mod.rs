// src/plan/mod.rs

//! Plan generation: resolve -> build graph -> sort -> schedule -> label.
//!
//! - [`scheduler`] packs topologically ordered courses into semesters.
//! - [`terms`] attaches "Fall 2025"-style labels to those semesters.
//!
//! [`Planner`] runs the whole pipeline. Every call builds its own graph and
//! semesters from the inputs it is handed; nothing is cached between calls.

pub mod scheduler;
pub mod terms;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::{Catalog, Course, CourseCode, Curriculum};
use crate::config::ConfigFile;
use crate::dag::{DependencyGraph, GraphBuilder, topological_order};
use crate::errors::{PlanError, Result};
use crate::resolve::Resolver;
use crate::types::{CorequisitePolicy, SelectionPolicy};

pub use scheduler::{Semester, schedule};
pub use terms::{Term, TermSequence, label};

/// One labelled semester of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTerm {
    pub term: Term,
    pub semester: Semester,
}

/// Ordered, labelled semesters: the final output of planning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    terms: Vec<PlannedTerm>,
}

/// A course placed in a term whose season it is not offered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferingConflict {
    pub term: Term,
    pub course: CourseCode,
}

impl Plan {
    pub fn new(terms: Vec<PlannedTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[PlannedTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(label, course codes)` pairs, the shape the web layer consumes.
    pub fn to_labelled(&self) -> Vec<(String, Vec<CourseCode>)> {
        self.terms
            .iter()
            .map(|t| (t.term.to_string(), t.semester.courses().to_vec()))
            .collect()
    }

    /// Every planned course code, in plan order.
    pub fn course_codes(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .flat_map(|t| t.semester.courses().iter().map(|c| c.as_str()))
    }

    /// Index of the semester holding `code`.
    pub fn semester_of(&self, code: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.semester.contains(code))
    }

    pub fn total_credits(&self) -> u64 {
        self.terms
            .iter()
            .map(|t| u64::from(t.semester.credits()))
            .sum()
    }

    /// Courses landing in a term whose season they are not offered in.
    pub fn offering_conflicts(&self, graph: &DependencyGraph) -> Vec<OfferingConflict> {
        let mut conflicts = Vec::new();
        for planned in &self.terms {
            for code in planned.semester.courses() {
                let offered = graph
                    .course(code)
                    .map(|node| node.is_offered_in(planned.term.season))
                    .unwrap_or(true);
                if !offered {
                    conflicts.push(OfferingConflict {
                        term: planned.term,
                        course: code.clone(),
                    });
                }
            }
        }
        conflicts
    }
}

/// Knobs for a planning run.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Per-term credit ceiling; must be positive.
    pub credit_limit: i64,
    /// Upper bound on the number of courses in the expanded graph.
    pub max_courses: usize,
    pub selection: SelectionPolicy,
    pub corequisites: CorequisitePolicy,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            credit_limit: 16,
            max_courses: 256,
            selection: SelectionPolicy::default(),
            corequisites: CorequisitePolicy::default(),
        }
    }
}

/// Everything a planning run produced.
#[derive(Debug, Clone)]
pub struct CoursePlan {
    pub plan: Plan,
    /// The expanded dependency graph the plan was scheduled from.
    pub graph: DependencyGraph,
    /// Courses picked to satisfy the requirements, before expansion.
    pub resolved: BTreeSet<Course>,
}

/// Runs the planning pipeline against a catalog.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    catalog: &'a Catalog,
    options: PlanOptions,
    completed: BTreeSet<CourseCode>,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog, options: PlanOptions) -> Self {
        Self {
            catalog,
            options,
            completed: BTreeSet::new(),
        }
    }

    /// Planner over a validated config's catalog, options and completed courses.
    pub fn from_config(cfg: &'a ConfigFile) -> Self {
        Self::new(&cfg.catalog, cfg.plan_options()).completed(cfg.planner.completed.iter().cloned())
    }

    /// Courses already finished; they are neither planned nor required.
    pub fn completed<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseCode>,
    {
        self.completed.extend(courses.into_iter().map(Into::into));
        self
    }

    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    /// Produce a labelled plan satisfying every curriculum.
    ///
    /// `rng` drives random elective selection; `reference` anchors the term
    /// labels. Any failure aborts the run; no partial plan is returned.
    pub fn plan<R: Rng>(
        &self,
        curricula: &[Curriculum],
        rng: R,
        reference: NaiveDate,
    ) -> Result<CoursePlan> {
        if self.options.credit_limit <= 0 {
            return Err(PlanError::InvalidCreditLimit(self.options.credit_limit));
        }

        let mut resolver = Resolver::new(self.options.selection, rng);
        let resolved = resolver.build_requirements(curricula)?;
        debug!(courses = resolved.len(), "requirements resolved");

        let graph = GraphBuilder::new(self.catalog)
            .completed(self.completed.iter().cloned())
            .build(&resolved)?;

        if graph.node_count() > self.options.max_courses {
            return Err(PlanError::TooManyCourses {
                count: graph.node_count(),
                max: self.options.max_courses,
            });
        }

        let order = topological_order(&graph)?;
        let semesters = schedule(
            &graph,
            &order,
            self.options.credit_limit,
            self.options.corequisites,
        )?;
        let plan = label(semesters, reference)?;

        info!(
            curricula = curricula.len(),
            courses = graph.node_count(),
            semesters = plan.len(),
            credits = plan.total_credits(),
            "course plan generated"
        );

        Ok(CoursePlan {
            plan,
            graph,
            resolved,
        })
    }
}

/// Run the pipeline with default options and the given credit ceiling,
/// returning just the labelled plan.
pub fn generate_plan<R: Rng>(
    catalog: &Catalog,
    curricula: &[Curriculum],
    credit_limit: i64,
    rng: R,
    reference: NaiveDate,
) -> Result<Plan> {
    let options = PlanOptions {
        credit_limit,
        ..PlanOptions::default()
    };
    Planner::new(catalog, options)
        .plan(curricula, rng, reference)
        .map(|result| result.plan)
}
