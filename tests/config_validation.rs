use courseplan_test_utils::builders::{ConfigFileBuilder, CourseConfigBuilder, group, req};
use courseplan_test_utils::init_tracing;

use std::error::Error;
use std::io::Write;

use courseplan::catalog::Requirement;
use courseplan::config::{ConfigFile, RawConfigFile, load_and_validate, load_from_str};
use courseplan::errors::PlanError;
use courseplan::types::{CorequisitePolicy, SelectionPolicy};
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn Error>>;

fn validate(raw: RawConfigFile) -> Result<ConfigFile, PlanError> {
    ConfigFile::try_from(raw)
}

#[test]
fn full_config_loads_with_nested_groups() -> TestResult {
    init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[planner]
credit_limit = 12
selection = "smallest-first"
corequisites = "same-term"
seed = 11

[course."CS 101"]
credits = 3
offered = ["fall", "spring"]

[course."CS 201"]
credits = 3
prerequisites = ["CS 101"]

[course."CS 202"]
credits = 4
corequisites = ["CS 201"]

[curriculum.major]
requirements = [
  "CS 101",
  {{ name = "core", min_credits = 3, options = ["CS 201", {{ min_credits = 4, options = ["CS 202"] }}] }},
]
"#
    )?;

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.planner.credit_limit, 12);
    assert_eq!(cfg.planner.selection, SelectionPolicy::SmallestFirst);
    assert_eq!(cfg.planner.corequisites, CorequisitePolicy::SameTerm);
    assert_eq!(cfg.planner.seed, Some(11));
    assert_eq!(cfg.catalog.len(), 3);

    let major = &cfg.curricula[0];
    assert_eq!(major.name, "major");
    assert_eq!(major.requirements.len(), 2);
    match &major.requirements[1] {
        Requirement::Group(core) => {
            assert_eq!(core.name.as_deref(), Some("core"));
            assert_eq!(core.options.len(), 2);
            assert!(matches!(core.options[1], Requirement::Group(_)));
        }
        other => panic!("Expected group, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn defaults_apply_when_planner_section_is_missing() -> TestResult {
    let raw = load_from_str(
        r#"
[course.A]
credits = 3

[curriculum.major]
requirements = ["A"]
"#,
    )?;
    let cfg = validate(raw)?;

    assert_eq!(cfg.planner.credit_limit, 16);
    assert_eq!(cfg.planner.max_courses, 256);
    assert_eq!(cfg.planner.selection, SelectionPolicy::Random);
    assert_eq!(cfg.planner.corequisites, CorequisitePolicy::Strict);
    Ok(())
}

#[test]
fn unknown_prerequisite_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .with_course("A", CourseConfigBuilder::new(3).prerequisite("NOPE").build())
        .with_curriculum("major", vec![req("A")])
        .build_raw();

    match validate(raw) {
        Err(PlanError::UnknownCourse {
            course,
            referenced_by,
        }) => {
            assert_eq!(course, "NOPE");
            assert!(referenced_by.contains("prerequisites of course 'A'"));
        }
        other => panic!("Expected UnknownCourse, got: {:?}", other),
    }
}

#[test]
fn unknown_requirement_names_its_curriculum() {
    let raw = ConfigFileBuilder::new()
        .with_course("A", CourseConfigBuilder::new(3).build())
        .with_curriculum("major", vec![group(3, &["A", "GHOST"])])
        .build_raw();

    match validate(raw) {
        Err(PlanError::UnknownCourse {
            course,
            referenced_by,
        }) => {
            assert_eq!(course, "GHOST");
            assert!(referenced_by.contains("major"));
        }
        other => panic!("Expected UnknownCourse, got: {:?}", other),
    }
}

#[test]
fn unknown_completed_course_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .completed("OLD 100")
        .with_course("A", CourseConfigBuilder::new(3).build())
        .with_curriculum("major", vec![req("A")])
        .build_raw();

    assert!(matches!(validate(raw), Err(PlanError::UnknownCourse { .. })));
}

#[test]
fn non_positive_credit_limit_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .credit_limit(-1)
        .with_course("A", CourseConfigBuilder::new(3).build())
        .with_curriculum("major", vec![req("A")])
        .build_raw();

    assert!(matches!(validate(raw), Err(PlanError::InvalidCreditLimit(-1))));
}

#[test]
fn config_without_curricula_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .with_course("A", CourseConfigBuilder::new(3).build())
        .build_raw();

    match validate(raw) {
        Err(PlanError::ConfigError(msg)) => assert!(msg.contains("[curriculum.<name>]")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn zero_credit_course_and_empty_group_are_rejected() {
    let zero_credit = ConfigFileBuilder::new()
        .with_course("A", CourseConfigBuilder::new(0).build())
        .with_curriculum("major", vec![req("A")])
        .build_raw();
    assert!(matches!(validate(zero_credit), Err(PlanError::ConfigError(_))));

    let empty_group = ConfigFileBuilder::new()
        .with_course("A", CourseConfigBuilder::new(3).build())
        .with_curriculum("major", vec![group(3, &[])])
        .build_raw();
    match validate(empty_group) {
        Err(PlanError::ConfigError(msg)) => assert!(msg.contains("no options")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn course_codes_must_match_the_configured_pattern() -> TestResult {
    let mut raw = ConfigFileBuilder::new()
        .with_course("CS 101", CourseConfigBuilder::new(3).build())
        .with_course("cs101", CourseConfigBuilder::new(3).build())
        .with_curriculum("major", vec![req("CS 101")])
        .build_raw();
    raw.planner.code_pattern = Some("^[A-Z]+ [0-9]{3}$".to_string());

    match validate(raw) {
        Err(PlanError::ConfigError(msg)) => assert!(msg.contains("'cs101'")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn self_reference_is_left_for_the_planner() -> TestResult {
    let raw = ConfigFileBuilder::new()
        .with_course("A", CourseConfigBuilder::new(3).corequisite("A").build())
        .with_curriculum("major", vec![req("A")])
        .build_raw();

    assert!(validate(raw).is_ok());
    Ok(())
}

#[test]
fn unknown_selection_policy_is_a_toml_error() {
    let result = load_from_str(
        r#"
[planner]
selection = "cheapest"
"#,
    );

    assert!(matches!(result, Err(PlanError::TomlError(_))));
}

#[test]
fn select_curricula_by_name() -> TestResult {
    let cfg = ConfigFileBuilder::new()
        .with_course("A", CourseConfigBuilder::new(3).build())
        .with_curriculum("major", vec![req("A")])
        .with_curriculum("minor", vec![req("A")])
        .build();

    assert_eq!(cfg.select_curricula(&[])?.len(), 2);

    let picked = cfg.select_curricula(&["minor".to_string()])?;
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name, "minor");

    assert!(matches!(
        cfg.select_curricula(&["nope".to_string()]),
        Err(PlanError::ConfigError(_))
    ));
    Ok(())
}
