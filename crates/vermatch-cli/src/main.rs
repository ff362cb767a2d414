mod bump;
mod check;
mod compare;
mod config;
mod equals;
mod output;
mod parse;
mod sort;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use config::{OutputFormat, VermatchConfig};
use output::Output;

#[derive(Parser, Debug)]
#[command(name = "vermatch")]
#[command(about = "Parse, order and match versions against constraints")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the segments, pre-release and metadata of versions
    Parse(parse::ParseArgs),

    /// Compare two versions, printing -1, 0 or 1
    Compare(compare::CompareArgs),

    /// Check versions against a constraint list
    Check(check::CheckArgs),

    /// Print only the versions that satisfy a constraint list
    Filter(check::FilterArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Derive the next major, minor or patch version
    Bump(bump::BumpArgs),

    /// Compare two constraint lists
    Equals(equals::EqualsArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = VermatchConfig::load_from_cwd()?.unwrap_or_default();

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let color = if args.no_color {
        Some(false)
    } else {
        config.output.color
    };
    let output = Output::new(format, color);

    match args.command {
        Commands::Parse(cmd) => parse::execute(cmd, &output),
        Commands::Compare(cmd) => compare::execute(cmd, &output),
        Commands::Check(cmd) => check::execute(cmd, &output),
        Commands::Filter(cmd) => check::execute_filter(cmd, &output),
        Commands::Sort(cmd) => sort::execute(cmd, config.sort.reverse, &output),
        Commands::Bump(cmd) => bump::execute(cmd, &output),
        Commands::Equals(cmd) => equals::execute(cmd, &output),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_check_args() {
        let args = Args::try_parse_from(["vermatch", "check", ">= 1.2, < 2.0", "1.5.0", "2.0.0"]).unwrap();
        match args.command {
            Commands::Check(cmd) => {
                assert_eq!(cmd.constraints, ">= 1.2, < 2.0");
                assert_eq!(cmd.versions, vec!["1.5.0", "2.0.0"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["vermatch", "sort", "1.0", "0.9", "--json", "-r"]).unwrap();
        assert!(args.json);
        match args.command {
            Commands::Sort(cmd) => assert!(cmd.reverse),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bump_part_values() {
        assert!(Args::try_parse_from(["vermatch", "bump", "minor", "1.2.3"]).is_ok());
        assert!(Args::try_parse_from(["vermatch", "bump", "micro", "1.2.3"]).is_err());
    }

    #[test]
    fn test_requires_versions() {
        assert!(Args::try_parse_from(["vermatch", "parse"]).is_err());
        assert!(Args::try_parse_from(["vermatch", "check", "~> 1.2"]).is_err());
    }
}
