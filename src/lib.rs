// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod plan;
pub mod resolve;
pub mod types;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::catalog::Requirement;
use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::errors::PlanError;
use crate::plan::{Plan, Planner};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + CLI overrides
/// - the planning pipeline
/// - offering-season warnings
/// - optional DOT export of the dependency graph
/// - printing the plan to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let mut cfg = load_and_validate(&config_path)?;
    apply_overrides(&mut cfg, &args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let curricula = cfg.select_curricula(&args.curricula)?;
    let reference = args
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());

    let rng = match cfg.planner.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        curricula = ?curricula.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        credit_limit = cfg.planner.credit_limit,
        seed = ?cfg.planner.seed,
        %reference,
        "planning"
    );

    let result = Planner::from_config(&cfg).plan(&curricula, rng, reference)?;

    for conflict in result.plan.offering_conflicts(&result.graph) {
        warn!(
            course = %conflict.course,
            term = %conflict.term,
            "course is not offered in the term it was scheduled for"
        );
    }

    if let Some(ref dot_path) = args.dot {
        fs::write(dot_path, result.graph.to_dot())
            .with_context(|| format!("writing dependency graph to {dot_path}"))?;
        info!(path = %dot_path, "dependency graph written");
    }

    print_plan(&result.plan);
    Ok(())
}

/// CLI flags take precedence over `[planner]`.
///
/// The credit limit is re-checked afterwards since a flag can replace the
/// validated value.
fn apply_overrides(cfg: &mut ConfigFile, args: &CliArgs) -> Result<(), PlanError> {
    if let Some(limit) = args.credit_limit {
        cfg.planner.credit_limit = limit;
    }
    if let Some(seed) = args.seed {
        cfg.planner.seed = Some(seed);
    }
    if let Some(selection) = args.selection {
        cfg.planner.selection = selection;
    }
    if let Some(corequisites) = args.corequisites {
        cfg.planner.corequisites = corequisites;
    }
    if cfg.planner.credit_limit <= 0 {
        return Err(PlanError::InvalidCreditLimit(cfg.planner.credit_limit));
    }
    Ok(())
}

fn print_plan(plan: &Plan) {
    for planned in plan.terms() {
        println!(
            "{} ({} credits)",
            planned.term,
            planned.semester.credits()
        );
        for code in planned.semester.courses() {
            println!("  - {code}");
        }
    }
    println!();
    println!(
        "{} terms, {} credits total",
        plan.len(),
        plan.total_credits()
    );
}

/// Dry-run output: planner settings, catalog and requirement trees.
fn print_dry_run(cfg: &ConfigFile) {
    println!("courseplan dry-run");
    println!("  planner.credit_limit = {}", cfg.planner.credit_limit);
    println!("  planner.max_courses = {}", cfg.planner.max_courses);
    println!("  planner.selection = {:?}", cfg.planner.selection);
    println!("  planner.corequisites = {:?}", cfg.planner.corequisites);
    if let Some(seed) = cfg.planner.seed {
        println!("  planner.seed = {seed}");
    }
    if !cfg.planner.completed.is_empty() {
        println!("  planner.completed = {:?}", cfg.planner.completed);
    }
    println!();

    println!("courses ({}):", cfg.catalog.len());
    for course in cfg.catalog.iter() {
        println!("  - {} ({} credits)", course.code, course.credits);
        if !course.prerequisites.is_empty() {
            println!("      prerequisites: {:?}", course.prerequisites);
        }
        if !course.corequisites.is_empty() {
            println!("      corequisites: {:?}", course.corequisites);
        }
        if !course.offered.is_empty() {
            println!("      offered: {:?}", course.offered);
        }
    }
    println!();

    println!("curricula ({}):", cfg.curricula.len());
    for curriculum in cfg.curricula.iter() {
        println!("  - {}", curriculum.name);
        for requirement in curriculum.requirements.iter() {
            print_requirement(requirement, 3);
        }
    }

    debug!("dry-run complete (no planning)");
}

fn print_requirement(requirement: &Requirement, depth: usize) {
    let indent = "  ".repeat(depth);
    match requirement {
        Requirement::Course(course) => println!("{indent}{}", course.code),
        Requirement::Group(group) => {
            let name = group.name.as_deref().unwrap_or("group");
            println!("{indent}{name}: at least {} credits of", group.min_credits);
            for option in group.options.iter() {
                print_requirement(option, depth + 1);
            }
        }
    }
}
