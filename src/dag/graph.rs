// src/dag/graph.rs

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use petgraph::Direction;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::catalog::{Course, CourseCode, Season};

/// Node payload: the parts of a course the scheduler and reports need.
#[derive(Debug, Clone)]
pub struct CourseNode {
    pub code: CourseCode,
    pub credits: u32,
    pub offered: BTreeSet<Season>,
}

impl CourseNode {
    fn from_course(course: &Course) -> Self {
        Self {
            code: course.code.clone(),
            credits: course.credits,
            offered: course.offered.clone(),
        }
    }

    pub fn is_offered_in(&self, season: Season) -> bool {
        self.offered.is_empty() || self.offered.contains(&season)
    }
}

impl fmt::Display for CourseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cr)", self.code, self.credits)
    }
}

/// Why one course must come before another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeKind {
    Prerequisite,
    Corequisite,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Prerequisite => f.write_str("prerequisite"),
            EdgeKind::Corequisite => f.write_str("corequisite"),
        }
    }
}

/// Directed "must come before" graph over courses, keyed by course code.
///
/// Edge direction: requisite -> dependent. For `CS 201` with prerequisite
/// `CS 101` the graph holds `CS 101 -> CS 201`.
///
/// Acyclicity is not enforced here; [`crate::dag::topological_order`]
/// reports cycles.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<CourseNode, EdgeKind>,
    index: HashMap<CourseCode, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course node if it is not already present.
    pub fn add_course(&mut self, course: &Course) -> NodeIndex {
        if let Some(&idx) = self.index.get(&course.code) {
            return idx;
        }
        let idx = self.graph.add_node(CourseNode::from_course(course));
        self.index.insert(course.code.clone(), idx);
        idx
    }

    /// Record that `before` must precede `after`, adding either node if needed.
    ///
    /// At most one edge exists per ordered pair. If a course lists the same
    /// requisite as both prerequisite and corequisite, the prerequisite edge
    /// wins.
    pub fn add_dependency(&mut self, before: &Course, after: &Course, kind: EdgeKind) {
        let from = self.add_course(before);
        let to = self.add_course(after);

        match self.graph.find_edge(from, to) {
            Some(edge) => {
                if kind == EdgeKind::Prerequisite {
                    self.graph[edge] = EdgeKind::Prerequisite;
                }
            }
            None => {
                self.graph.add_edge(from, to, kind);
            }
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn course(&self, code: &str) -> Option<&CourseNode> {
        self.index.get(code).map(|&idx| &self.graph[idx])
    }

    pub fn credits_of(&self, code: &str) -> Option<u32> {
        self.course(code).map(|node| node.credits)
    }

    /// All course nodes, in insertion order.
    pub fn courses(&self) -> impl Iterator<Item = &CourseNode> {
        self.graph.node_weights()
    }

    /// Courses that must come before `code`, with the kind of constraint.
    pub fn predecessors(&self, code: &str) -> Vec<(&str, EdgeKind)> {
        self.neighbours(code, Direction::Incoming)
    }

    /// Courses that `code` must come before.
    pub fn successors(&self, code: &str) -> Vec<(&str, EdgeKind)> {
        self.neighbours(code, Direction::Outgoing)
    }

    /// Graphviz DOT rendering of the graph.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }

    pub(crate) fn inner(&self) -> &DiGraph<CourseNode, EdgeKind> {
        &self.graph
    }

    fn neighbours(&self, code: &str, direction: Direction) -> Vec<(&str, EdgeKind)> {
        let Some(&idx) = self.index.get(code) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Incoming => edge.source(),
                    Direction::Outgoing => edge.target(),
                };
                (self.graph[other].code.as_str(), *edge.weight())
            })
            .collect()
    }
}
