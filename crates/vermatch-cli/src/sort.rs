//! Sort command - order versions by precedence.

use anyhow::{Context, Result};
use clap::Args;
use vermatch::{Version, VersionCollection};

use crate::output::Output;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Sort newest first
    #[arg(short = 'r', long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs, reverse_by_default: bool, output: &Output) -> Result<i32> {
    let mut collection = args
        .versions
        .iter()
        .map(|raw| Version::parse(raw).with_context(|| format!("Could not parse \"{}\"", raw)))
        .collect::<Result<VersionCollection>>()?;

    if args.reverse || reverse_by_default {
        collection.rsort();
    } else {
        collection.sort();
    }

    let sorted: Vec<String> = collection.iter().map(|v| v.to_string()).collect();
    if output.is_json() {
        output.print_json(&sorted)?;
    } else {
        for version in &sorted {
            println!("{}", version);
        }
    }

    Ok(0)
}
