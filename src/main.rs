//! keydiff - Keyed diff for delimited table snapshots

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use keydiff::config::{ColorMode, Config, OutputFormat};
use keydiff::output::OutputFactory;
use keydiff::{run_files, RunOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColor {
    Auto,
    Always,
    Never,
}

impl From<CliColor> for ColorMode {
    fn from(c: CliColor) -> Self {
        match c {
            CliColor::Auto => ColorMode::Auto,
            CliColor::Always => ColorMode::Always,
            CliColor::Never => ColorMode::Never,
        }
    }
}

/// Compare two delimited snapshots of a table keyed by an ID column
#[derive(Parser, Debug)]
#[command(name = "keydiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Baseline (older) file, loaded into memory
    baseline: PathBuf,

    /// Candidate (newer) file, streamed against the baseline
    candidate: PathBuf,

    /// Field separator
    #[arg(short, long, default_value_t = '|')]
    sep: char,

    /// 1-based field index used to uniquely identify a record
    #[arg(short, long, default_value_t = 2)]
    id: usize,

    /// Treat the first record of each file as data
    #[arg(long)]
    no_header: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliOutputFormat,

    /// When to colour the text report
    #[arg(long, value_enum, default_value = "auto")]
    color: CliColor,

    /// Only show the summary, not individual records
    #[arg(long)]
    stats_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Rewrite single-dash `-sep` and `-id` to their long forms, up to `--`
fn normalize_flags<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut options_ended = false;
    args.into_iter()
        .map(|arg| {
            if options_ended {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                options_ended = true;
                return arg;
            }
            for name in ["sep", "id"] {
                if let Some(rest) = s.strip_prefix('-').and_then(|r| r.strip_prefix(name)) {
                    if rest.is_empty() || rest.starts_with('=') {
                        return OsString::from(format!("--{}{}", name, rest));
                    }
                }
            }
            arg
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_flags(std::env::args_os()));

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::new(cli.sep, cli.id)
        .context("Invalid arguments")?
        .with_header(!cli.no_header);

    let mut output = OutputFactory::stdout(cli.format.into(), cli.color.into());
    let options = RunOptions {
        stats_only: cli.stats_only,
    };

    run_files(&config, &cli.baseline, &cli.candidate, output.as_mut(), options).with_context(
        || {
            format!(
                "Failed to compare {} against {}",
                cli.candidate.display(),
                cli.baseline.display()
            )
        },
    )?;
    Ok(())
}
