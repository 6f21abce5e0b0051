use humansize::{format_size as humanize, WINDOWS};
use std::path::Path;

use crate::config::Config;

/// Output name for the thumbnail of `source`.
///
/// A supported container extension is replaced by the configured suffix;
/// anything else keeps its full name and gets the suffix appended.
pub fn thumbnail_name(source: &Path, config: &Config) -> String {
    format!("{}{}", base_name(source, config), config.output_suffix)
}

/// Output name for the `index`-th embedded image when every candidate is kept.
pub fn candidate_name(source: &Path, config: &Config, index: usize) -> String {
    format!("{}_{:03}.png", base_name(source, config), index)
}

/// Human readable size, 1024 based (`1.50 kB`).
pub fn format_size(bytes: u64) -> String {
    humanize(bytes, WINDOWS)
}

fn base_name(source: &Path, config: &Config) -> String {
    let name = if config.is_supported(source) {
        source.file_stem()
    } else {
        source.file_name()
    };
    name.map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}
