use courseplan_test_utils::builders::catalog_of;
use courseplan_test_utils::init_tracing;

use std::collections::BTreeSet;
use std::error::Error;

use courseplan::catalog::{Catalog, Course};
use courseplan::dag::{EdgeKind, GraphBuilder, build_graph, topological_order};
use courseplan::errors::PlanError;

type TestResult = Result<(), Box<dyn Error>>;

// A -> B -> C, D is a corequisite of C.
fn chain_catalog() -> Catalog {
    catalog_of(&[
        Course::new("A", 3),
        Course::new("B", 3).with_prerequisite("A"),
        Course::new("C", 4).with_prerequisite("B").with_corequisite("D"),
        Course::new("D", 1),
    ])
}

fn only(catalog: &Catalog, code: &str) -> BTreeSet<Course> {
    BTreeSet::from([catalog.get(code).cloned().expect("course in catalog")])
}

#[test]
fn builder_pulls_in_transitive_requisites() -> TestResult {
    init_tracing();

    let catalog = chain_catalog();
    let graph = build_graph(&only(&catalog, "C"), &catalog)?;

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.credits_of("C"), Some(4));

    let mut preds = graph.predecessors("C");
    preds.sort();
    assert_eq!(
        preds,
        vec![("B", EdgeKind::Prerequisite), ("D", EdgeKind::Corequisite)]
    );
    assert_eq!(graph.successors("A"), vec![("B", EdgeKind::Prerequisite)]);
    Ok(())
}

#[test]
fn unknown_requisite_is_reported() {
    let catalog = catalog_of(&[Course::new("E", 3).with_prerequisite("Z")]);

    match build_graph(&only(&catalog, "E"), &catalog) {
        Err(PlanError::UnknownCourse {
            course,
            referenced_by,
        }) => {
            assert_eq!(course, "Z");
            assert!(referenced_by.contains("'E'"));
        }
        other => panic!("Expected UnknownCourse, got: {:?}", other),
    }
}

#[test]
fn completed_courses_are_left_out() -> TestResult {
    let catalog = chain_catalog();
    let graph = GraphBuilder::new(&catalog)
        .completed(["B"])
        .build(&only(&catalog, "C"))?;

    assert!(graph.contains("C"));
    assert!(graph.contains("D"));
    assert!(!graph.contains("B"));
    assert!(!graph.contains("A"), "requisites of completed courses are not expanded");
    assert_eq!(graph.edge_count(), 1);
    Ok(())
}

#[test]
fn prerequisite_edge_wins_over_corequisite() -> TestResult {
    let catalog = catalog_of(&[
        Course::new("A", 3),
        Course::new("X", 3).with_prerequisite("A").with_corequisite("A"),
    ]);
    let graph = build_graph(&only(&catalog, "X"), &catalog)?;

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.predecessors("X"), vec![("A", EdgeKind::Prerequisite)]);
    Ok(())
}

#[test]
fn dot_output_names_every_course() -> TestResult {
    let catalog = chain_catalog();
    let graph = build_graph(&only(&catalog, "C"), &catalog)?;
    let dot = graph.to_dot();

    assert!(dot.starts_with("digraph"));
    for code in ["A (3 cr)", "B (3 cr)", "C (4 cr)", "D (1 cr)"] {
        assert!(dot.contains(code), "missing {code} in {dot}");
    }
    assert!(dot.contains("corequisite"));
    Ok(())
}

#[test]
fn topological_order_breaks_ties_by_code() -> TestResult {
    init_tracing();

    let catalog = catalog_of(&[
        Course::new("D", 3),
        Course::new("C", 3).with_prerequisite("A"),
        Course::new("B", 3),
        Course::new("A", 3),
    ]);
    let all: BTreeSet<Course> = catalog.iter().cloned().collect();
    let graph = build_graph(&all, &catalog)?;

    assert_eq!(topological_order(&graph)?, vec!["A", "B", "C", "D"]);
    Ok(())
}

#[test]
fn self_prerequisite_is_a_cycle() {
    let catalog = catalog_of(&[Course::new("A", 3).with_prerequisite("A")]);
    let graph = build_graph(&only(&catalog, "A"), &catalog).expect("graph builds");

    match topological_order(&graph) {
        Err(PlanError::Cycle { members }) => assert_eq!(members, vec!["A"]),
        other => panic!("Expected Cycle, got: {:?}", other),
    }
}

#[test]
fn mutual_corequisites_are_a_cycle() {
    init_tracing();

    let catalog = catalog_of(&[
        Course::new("A", 3).with_corequisite("B"),
        Course::new("B", 3).with_corequisite("A"),
        Course::new("C", 3).with_prerequisite("A"),
    ]);
    let graph = build_graph(&only(&catalog, "C"), &catalog).expect("graph builds");

    match topological_order(&graph) {
        Err(PlanError::Cycle { members }) => assert_eq!(members, vec!["A", "B"]),
        other => panic!("Expected Cycle, got: {:?}", other),
    }
}
