use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use finegrain_mirror::{FileOutcome, MirrorReport, RepositoryMirror};

#[derive(Parser)]
#[command(name = "finegrain")]
#[command(about = "Mirror a source tree into one file per declaration", long_about = None)]
#[command(version)]
struct Cli {
    /// Source repository root
    source: PathBuf,

    /// Destination root for the fine-grained mirror
    dest: PathBuf,

    /// Print the full run report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON parsing
    if cli.json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut mirror = RepositoryMirror::new(&cli.source, &cli.dest)
        .with_context(|| format!("Failed to open source repository {}", cli.source.display()))?;
    let report = mirror.run();

    log_failures(&report);

    if cli.json {
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    } else {
        eprintln!(
            "Mirrored {} files ({} converted, {} copied, {} failed, {} declaration writes failed) in {}ms",
            report.records.len(),
            report.converted(),
            report.copied(),
            report.failed(),
            report.failed_writes(),
            report.time_ms
        );
    }

    Ok(())
}

/// Failure visibility lives here, at the process boundary; the walk itself
/// only records outcomes.
fn log_failures(report: &MirrorReport) {
    for record in &report.records {
        match &record.outcome {
            FileOutcome::Failed { reason } => {
                log::warn!("{}: {reason}", record.source.display());
            }
            FileOutcome::Converted { failed_writes, .. } => {
                for failure in failed_writes {
                    log::warn!("{}: failed to write {failure}", record.source.display());
                }
            }
            FileOutcome::Copied => {}
        }
    }
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
