//! Equals command - compare two constraint lists.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use vermatch::ConstraintSet;

use crate::output::Output;

#[derive(Args, Debug)]
pub struct EqualsArgs {
    /// First constraint list
    pub left: String,

    /// Second constraint list
    pub right: String,

    /// Compare the versions each list accepts instead of the written constraints
    #[arg(short = 'l', long)]
    pub logical: bool,
}

#[derive(Serialize)]
struct Equality<'a> {
    left: &'a str,
    right: &'a str,
    logical: bool,
    equal: bool,
}

/// Exit code 1 when the lists differ
pub fn execute(args: EqualsArgs, output: &Output) -> Result<i32> {
    let left = ConstraintSet::parse(&args.left)
        .with_context(|| format!("Could not parse constraints \"{}\"", args.left))?;
    let right = ConstraintSet::parse(&args.right)
        .with_context(|| format!("Could not parse constraints \"{}\"", args.right))?;

    let equal = if args.logical {
        left.equals_logical(&right)
    } else {
        left.equals(&right)
    };

    if output.is_json() {
        output.print_json(&Equality {
            left: &args.left,
            right: &args.right,
            logical: args.logical,
            equal,
        })?;
    } else {
        output.print_verdict(equal, &format!("{}  vs  {}", left, right));
    }

    Ok(if equal { 0 } else { 1 })
}
