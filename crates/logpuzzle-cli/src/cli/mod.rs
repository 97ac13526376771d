//! CLI for logpuzzle.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use logpuzzle_core::config::LogpuzzleConfig;
use logpuzzle_core::extract::{extract_with, PuzzlePattern};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use commands::{run_fetch, run_print};

/// Exit status for a bare invocation with no arguments.
pub const EXIT_USAGE: i32 = 1;

/// Find puzzle image URLs in an Apache log; print them or download the images.
#[derive(Debug, Parser)]
#[command(name = "logpuzzle")]
#[command(about = "Extract puzzle image URLs from an Apache logfile", long_about = None)]
pub struct Cli {
    /// Destination directory for downloaded images.
    #[arg(short = 'd', long = "todir", value_name = "DIR")]
    pub todir: Option<PathBuf>,

    /// Apache logfile to extract urls from.
    pub logfile: PathBuf,
}

/// Runs the tool for `args` (program name first) and returns the exit status.
///
/// With no arguments beyond the program name, writes the usage line to `out`
/// and returns [`EXIT_USAGE`] without loading config. Argument errors exit
/// the process the way clap does.
pub fn run_with_args<I, T, C, W>(args: I, load_config: C, out: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: FnOnce() -> Result<LogpuzzleConfig>,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        writeln!(out, "{}", Cli::command().render_usage())?;
        return Ok(EXIT_USAGE);
    }

    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| e.exit());
    let cfg = load_config()?;
    tracing::debug!("loaded config: {:?}", cfg);
    cli.run(&cfg, out)?;
    Ok(0)
}

impl Cli {
    pub fn run<W: Write>(self, cfg: &LogpuzzleConfig, out: &mut W) -> Result<()> {
        let pattern = PuzzlePattern::from_override(cfg.pattern.as_deref())?;

        let urls = extract_with(&self.logfile, &pattern)?;
        tracing::info!("{} puzzle url(s) in {}", urls.len(), self.logfile.display());

        match self.todir {
            Some(dir) => run_fetch(&urls, &dir, &cfg.http)?,
            None => run_print(&urls, out)?,
        }

        Ok(())
    }
}
