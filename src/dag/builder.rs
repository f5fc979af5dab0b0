// src/dag/builder.rs

//! Expands a resolved course set into a full dependency graph.

use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::catalog::{Catalog, Course, CourseCode};
use crate::dag::graph::{DependencyGraph, EdgeKind};
use crate::errors::{PlanError, Result};

/// Builds a [`DependencyGraph`] from a course set, pulling in every
/// prerequisite and corequisite transitively from the catalog.
#[derive(Debug)]
pub struct GraphBuilder<'a> {
    catalog: &'a Catalog,
    completed: BTreeSet<CourseCode>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            completed: BTreeSet::new(),
        }
    }

    /// Courses the student has already finished.
    ///
    /// They are left out of the graph entirely: no node, no edge, and their
    /// own requisites are not expanded.
    pub fn completed<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseCode>,
    {
        self.completed.extend(courses.into_iter().map(Into::into));
        self
    }

    pub fn build(&self, courses: &BTreeSet<Course>) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut worklist: VecDeque<&Course> = VecDeque::new();

        for course in courses {
            if self.is_completed(&course.code) {
                trace!(course = %course.code, "skipping completed course");
                continue;
            }
            if seen.insert(course.code.as_str()) {
                worklist.push_back(course);
            }
        }

        while let Some(course) = worklist.pop_front() {
            graph.add_course(course);

            let requisites = course
                .prerequisites
                .iter()
                .map(|code| (code, EdgeKind::Prerequisite))
                .chain(
                    course
                        .corequisites
                        .iter()
                        .map(|code| (code, EdgeKind::Corequisite)),
                );

            for (code, kind) in requisites {
                if self.is_completed(code) {
                    continue;
                }

                let requisite =
                    self.catalog
                        .get(code)
                        .ok_or_else(|| PlanError::UnknownCourse {
                            course: code.clone(),
                            referenced_by: format!("{kind} list of '{}'", course.code),
                        })?;

                graph.add_dependency(requisite, course, kind);

                if seen.insert(requisite.code.as_str()) {
                    worklist.push_back(requisite);
                }
            }
        }

        debug!(
            requested = courses.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );
        Ok(graph)
    }

    fn is_completed(&self, code: &str) -> bool {
        self.completed.contains(code)
    }
}

/// Build the dependency graph for `courses` with nothing marked completed.
pub fn build_graph(courses: &BTreeSet<Course>, catalog: &Catalog) -> Result<DependencyGraph> {
    GraphBuilder::new(catalog).build(courses)
}
