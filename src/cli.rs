use clap::Parser;
use std::path::PathBuf;

use afthumb::{Config, SelectionStrategy};

#[derive(Parser, Debug)]
#[command(name = "afthumb")]
#[command(version, about = "Extract embedded PNG thumbnails from Affinity documents", long_about = None)]
pub struct Cli {
    /// Affinity documents (.afphoto, .afdesign, .afpub, .af)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory for extracted images (defaults to next to each input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Which image to keep when several are embedded: smallest, largest or first
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Write every embedded image instead of one thumbnail
    #[arg(short, long)]
    pub all: bool,

    /// Print a JSON report per file
    #[arg(long)]
    pub json: bool,

    /// Replace existing output files
    #[arg(long)]
    pub overwrite: bool,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads the config file if given and applies command line overrides.
    ///
    /// Call after the tracing subscriber is installed: unknown strategy names
    /// are reported with a warning.
    pub fn resolve_config(&self) -> afthumb::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(name) = &self.strategy {
            config = config.with_strategy(SelectionStrategy::from_name(name));
        }
        if self.overwrite {
            config = config.with_overwrite(true);
        }

        Ok(config)
    }
}
