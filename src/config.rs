//! Extraction settings
//!
//! Everything here is caller policy; the scanner in [`crate::extractor`] never
//! looks at it.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::SelectionStrategy;

pub const DEFAULT_MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_thumbnail.png";

/// Options applied when turning a container file into a thumbnail
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accepted container extensions, without the leading dot
    pub supported_extensions: Vec<String>,
    /// Files above this size are rejected before being read
    pub max_file_size: u64,
    /// Which embedded image to keep when there are several
    pub strategy: SelectionStrategy,
    /// Replaces the container extension in output file names
    pub output_suffix: String,
    /// Whether existing output files may be replaced
    pub overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supported_extensions: ["afphoto", "afdesign", "afpub", "af"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            strategy: SelectionStrategy::default(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            overwrite: false,
        }
    }
}

impl Config {
    /// Reads a JSON config; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_file_size(mut self, max: u64) -> Self {
        self.max_file_size = max;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Case-insensitive check of the file extension against the accepted list.
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.supported_extensions
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(ext))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_affinity_extensions_in_any_case() {
        let config = Config::default();
        assert!(config.is_supported(Path::new("poster.afdesign")));
        assert!(config.is_supported(Path::new("PHOTO.AFPHOTO")));
        assert!(config.is_supported(Path::new("dir/book.afpub")));
        assert!(config.is_supported(Path::new("any.af")));
        assert!(!config.is_supported(Path::new("image.png")));
        assert!(!config.is_supported(Path::new("afdesign")));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "strategy": "largest" }"#).unwrap();
        assert_eq!(config.strategy, SelectionStrategy::Largest);
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.output_suffix, DEFAULT_OUTPUT_SUFFIX);
    }
}
