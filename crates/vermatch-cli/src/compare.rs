//! Compare command - order two versions.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::cmp::Ordering;
use vermatch::Version;

use crate::output::Output;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

#[derive(Serialize)]
struct Comparison<'a> {
    left: &'a str,
    right: &'a str,
    result: i8,
}

pub fn execute(args: CompareArgs, output: &Output) -> Result<i32> {
    let left = Version::parse(&args.left).with_context(|| format!("Could not parse \"{}\"", args.left))?;
    let right = Version::parse(&args.right).with_context(|| format!("Could not parse \"{}\"", args.right))?;

    let result = match left.compare(&right) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };

    if output.is_json() {
        output.print_json(&Comparison {
            left: &args.left,
            right: &args.right,
            result,
        })?;
    } else {
        println!("{}", result);
    }

    Ok(0)
}
