//! Parse command - show how versions are understood.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde::Serialize;
use vermatch::Version;

use crate::output::Output;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Versions to parse
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

#[derive(Serialize)]
struct ParsedVersion<'a> {
    input: &'a str,
    canonical: String,
    segments: &'a [u32],
    prerelease: &'a str,
    metadata: &'a str,
}

pub fn execute(args: ParseArgs, output: &Output) -> Result<i32> {
    let versions = args
        .versions
        .iter()
        .map(|raw| Version::parse(raw).with_context(|| format!("Could not parse \"{}\"", raw)))
        .collect::<Result<Vec<_>>>()?;

    let parsed: Vec<ParsedVersion> = versions
        .iter()
        .map(|v| ParsedVersion {
            input: v.original(),
            canonical: v.to_string(),
            segments: v.segments(),
            prerelease: v.prerelease(),
            metadata: v.metadata(),
        })
        .collect();

    if output.is_json() {
        output.print_json(&parsed)?;
        return Ok(0);
    }

    for p in &parsed {
        println!("{}", style(&p.canonical).bold());
        let segments: Vec<String> = p.segments.iter().map(|s| s.to_string()).collect();
        println!("  segments:   {}", segments.join(", "));
        if !p.prerelease.is_empty() {
            println!("  prerelease: {}", p.prerelease);
        }
        if !p.metadata.is_empty() {
            println!("  metadata:   {}", p.metadata);
        }
    }

    Ok(0)
}
