// src/config/validate.rs

use regex::Regex;

use crate::catalog::{Catalog, Course, CourseGroup, Curriculum, Requirement};
use crate::config::model::{ConfigFile, RawConfigFile, RequirementConfig};
use crate::errors::{PlanError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PlanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let catalog = build_catalog(&raw);
        let curricula = build_curricula(&raw, &catalog)?;
        Ok(ConfigFile::new_unchecked(raw.planner, catalog, curricula))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_curricula(cfg)?;
    validate_planner_section(cfg)?;
    validate_course_codes(cfg)?;
    validate_course_references(cfg)?;
    validate_completed(cfg)?;
    Ok(())
}

fn ensure_has_curricula(cfg: &RawConfigFile) -> Result<()> {
    if cfg.curriculum.is_empty() {
        return Err(PlanError::ConfigError(
            "config must contain at least one [curriculum.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_planner_section(cfg: &RawConfigFile) -> Result<()> {
    // selection / corequisites are typed and checked during deserialization.

    if cfg.planner.credit_limit <= 0 {
        return Err(PlanError::InvalidCreditLimit(cfg.planner.credit_limit));
    }

    if cfg.planner.max_courses == 0 {
        return Err(PlanError::ConfigError(
            "[planner].max_courses must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_course_codes(cfg: &RawConfigFile) -> Result<()> {
    let pattern = match cfg.planner.code_pattern {
        Some(ref pattern) => Some(Regex::new(pattern).map_err(|e| {
            PlanError::ConfigError(format!("[planner].code_pattern is not a valid regex: {e}"))
        })?),
        None => None,
    };

    for (code, course) in cfg.course.iter() {
        if code.trim().is_empty() {
            return Err(PlanError::ConfigError(
                "course codes must not be empty".to_string(),
            ));
        }
        if course.credits == 0 {
            return Err(PlanError::ConfigError(format!(
                "course '{code}' must be worth at least one credit"
            )));
        }
        if let Some(ref re) = pattern {
            if !re.is_match(code) {
                return Err(PlanError::ConfigError(format!(
                    "course code '{code}' does not match [planner].code_pattern '{}'",
                    re.as_str()
                )));
            }
        }
    }
    Ok(())
}

fn validate_course_references(cfg: &RawConfigFile) -> Result<()> {
    // Self-references and longer cycles are deliberately not rejected here:
    // the topological sort reports them with every offending course.
    for (code, course) in cfg.course.iter() {
        for (list, refs) in [
            ("prerequisites", &course.prerequisites),
            ("corequisites", &course.corequisites),
        ] {
            for dep in refs {
                if !cfg.course.contains_key(dep) {
                    return Err(PlanError::UnknownCourse {
                        course: dep.clone(),
                        referenced_by: format!("{list} of course '{code}'"),
                    });
                }
            }
        }
    }
    Ok(())
}

fn validate_completed(cfg: &RawConfigFile) -> Result<()> {
    for code in cfg.planner.completed.iter() {
        if !cfg.course.contains_key(code) {
            return Err(PlanError::UnknownCourse {
                course: code.clone(),
                referenced_by: "[planner].completed".to_string(),
            });
        }
    }
    Ok(())
}

fn build_catalog(cfg: &RawConfigFile) -> Catalog {
    cfg.course
        .iter()
        .map(|(code, course)| Course {
            code: code.clone(),
            credits: course.credits,
            prerequisites: course.prerequisites.iter().cloned().collect(),
            corequisites: course.corequisites.iter().cloned().collect(),
            offered: course.offered.iter().copied().collect(),
        })
        .collect()
}

fn build_curricula(cfg: &RawConfigFile, catalog: &Catalog) -> Result<Vec<Curriculum>> {
    cfg.curriculum
        .iter()
        .map(|(name, curriculum)| {
            let requirements = curriculum
                .requirements
                .iter()
                .map(|req| build_requirement(req, name, catalog))
                .collect::<Result<Vec<_>>>()?;
            Ok(Curriculum {
                name: name.clone(),
                requirements,
            })
        })
        .collect()
}

fn build_requirement(
    req: &RequirementConfig,
    curriculum: &str,
    catalog: &Catalog,
) -> Result<Requirement> {
    match req {
        RequirementConfig::Course(code) => catalog
            .get(code)
            .cloned()
            .map(Requirement::Course)
            .ok_or_else(|| PlanError::UnknownCourse {
                course: code.clone(),
                referenced_by: format!("curriculum '{curriculum}'"),
            }),
        RequirementConfig::Group {
            name,
            min_credits,
            options,
        } => {
            let label = name.as_deref().unwrap_or("<unnamed>");
            if *min_credits == 0 {
                return Err(PlanError::ConfigError(format!(
                    "group {label} in curriculum '{curriculum}' must require at least one credit"
                )));
            }
            if options.is_empty() {
                return Err(PlanError::ConfigError(format!(
                    "group {label} in curriculum '{curriculum}' has no options"
                )));
            }

            let options = options
                .iter()
                .map(|option| build_requirement(option, curriculum, catalog))
                .collect::<Result<Vec<_>>>()?;

            Ok(Requirement::Group(CourseGroup {
                name: name.clone(),
                min_credits: *min_credits,
                options,
            }))
        }
    }
}
