//! afthumb - Affinity thumbnail extractor
//!
//! Command line front end: scans each document for embedded PNGs and writes
//! the selected one next to it (or into `--output-dir`).

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use afthumb::naming::format_size;
use afthumb::{save_all_candidates, save_thumbnail, Config, ThumbnailReport};
use cli::Cli;

enum Outcome {
    Thumbnail {
        report: Box<ThumbnailReport>,
        output: PathBuf,
    },
    All {
        outputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli
        .resolve_config()
        .context("Failed to load configuration")?;

    let pb = progress_bar(cli.files.len());

    let results: Vec<(PathBuf, Result<Outcome>)> = cli
        .files
        .par_iter()
        .map(|path| {
            let result = process_file(path, &cli, &config);
            pb.inc(1);
            (path.clone(), result)
        })
        .collect();

    pb.finish_and_clear();

    let mut failed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(outcome) => print_outcome(path, outcome, cli.json)?,
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {:#}", style("[!]").red().bold(), path.display(), e);
            }
        }
    }

    if results.len() > 1 {
        println!();
        println!(
            "{} {} extracted, {} failed",
            style("Done:").cyan().bold(),
            style(results.len() - failed).green(),
            style(failed).yellow()
        );
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed", failed, results.len());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "afthumb=debug" } else { "afthumb=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn progress_bar(total: usize) -> ProgressBar {
    if total < 2 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}

fn process_file(path: &Path, cli: &Cli, config: &Config) -> Result<Outcome> {
    let output_dir = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    if cli.all {
        let outputs = save_all_candidates(path, &output_dir, config)
            .with_context(|| format!("Failed to extract images from {}", path.display()))?;
        return Ok(Outcome::All { outputs });
    }

    let (thumbnail, output) = save_thumbnail(path, &output_dir, config)
        .with_context(|| format!("Failed to extract thumbnail from {}", path.display()))?;

    Ok(Outcome::Thumbnail {
        report: Box::new(thumbnail.report().clone()),
        output,
    })
}

fn print_outcome(path: &Path, outcome: &Outcome, json: bool) -> Result<()> {
    match outcome {
        Outcome::Thumbnail { report, output } => {
            if json {
                println!("{}", report.to_json().context("Failed to serialize report")?);
                return Ok(());
            }

            println!(
                "{} {} ({})",
                style("[+]").green().bold(),
                path.display(),
                report.source_size_human
            );
            println!(
                "    {} of {} embedded images, {} strategy",
                ordinal(report.candidates.iter().position(|c| *c == report.selected)),
                report.candidates.len(),
                report.strategy
            );
            println!(
                "    -> {} ({}{})",
                output.display(),
                format_size(report.selected.len as u64),
                report
                    .dimensions_label()
                    .map(|d| format!(", {}", d))
                    .unwrap_or_default()
            );
        }
        Outcome::All { outputs } => {
            println!(
                "{} {}: {} images",
                style("[+]").green().bold(),
                path.display(),
                outputs.len()
            );
            for output in outputs {
                println!("    {}", output.display());
            }
        }
    }
    Ok(())
}

fn ordinal(index: Option<usize>) -> String {
    match index {
        Some(i) => format!("#{}", i + 1),
        None => "?".to_string(),
    }
}
