//! Bump command - derive the next version.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use vermatch::{Version, VersionBuilder};

use crate::output::Output;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Which segment to increase
    #[arg(value_enum)]
    pub part: Part,

    /// Version to start from
    pub version: String,

    /// Pre-release identifiers for the new version
    #[arg(long, value_name = "ID")]
    pub pre: Option<String>,

    /// Build metadata for the new version
    #[arg(long, value_name = "ID")]
    pub metadata: Option<String>,
}

pub fn execute(args: BumpArgs, output: &Output) -> Result<i32> {
    let version = Version::parse(&args.version)
        .with_context(|| format!("Could not parse \"{}\"", args.version))?;

    let mut builder = VersionBuilder::new(&version);
    match args.part {
        Part::Major => builder.next_major(),
        Part::Minor => builder.next_minor(),
        Part::Patch => builder.next_patch(),
    };

    // Metadata never carries over to a new version
    builder.reset_metadata();

    if let Some(pre) = &args.pre {
        builder.set_prerelease(pre).context("Invalid --pre value")?;
    }
    if let Some(metadata) = &args.metadata {
        builder.set_metadata(metadata).context("Invalid --metadata value")?;
    }

    let next = builder.build();
    log::debug!("Bumped {} to {}", version, next);

    if output.is_json() {
        output.print_json(&next.to_string())?;
    } else {
        println!("{}", next);
    }

    Ok(0)
}
