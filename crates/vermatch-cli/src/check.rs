//! Check and filter commands - match versions against a constraint list.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use vermatch::{ConstraintSet, Version};

use crate::output::Output;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Comma-separated constraints, e.g. ">= 1.2, < 2.0"
    #[arg(value_name = "CONSTRAINTS")]
    pub constraints: String,

    /// Versions to check
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Comma-separated constraints, e.g. "~> 1.2"
    #[arg(value_name = "CONSTRAINTS")]
    pub constraints: String,

    /// Candidate versions; unparsable ones are skipped
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

#[derive(Serialize)]
struct CheckResult<'a> {
    version: &'a str,
    satisfied: bool,
}

fn parse_set(constraints: &str) -> Result<ConstraintSet> {
    ConstraintSet::parse(constraints)
        .with_context(|| format!("Could not parse constraints \"{}\"", constraints))
}

/// Exit code 1 when any version does not satisfy the constraints
pub fn execute(args: CheckArgs, output: &Output) -> Result<i32> {
    let set = parse_set(&args.constraints)?;

    let mut results = Vec::with_capacity(args.versions.len());
    for raw in &args.versions {
        let version = Version::parse(raw).with_context(|| format!("Could not parse \"{}\"", raw))?;
        results.push(CheckResult {
            version: raw,
            satisfied: set.check(&version),
        });
    }

    if output.is_json() {
        output.print_json(&results)?;
    } else {
        for result in &results {
            output.print_verdict(result.satisfied, result.version);
        }
    }

    Ok(if results.iter().all(|r| r.satisfied) { 0 } else { 1 })
}

pub fn execute_filter(args: FilterArgs, output: &Output) -> Result<i32> {
    let set = parse_set(&args.constraints)?;

    let matching: Vec<&str> = args
        .versions
        .iter()
        .filter(|raw| match Version::parse(raw) {
            Ok(version) => set.check(&version),
            Err(e) => {
                log::warn!("Skipping {}", e);
                false
            }
        })
        .map(|raw| raw.as_str())
        .collect();

    if output.is_json() {
        output.print_json(&matching)?;
    } else {
        for version in &matching {
            println!("{}", version);
        }
    }

    Ok(0)
}
