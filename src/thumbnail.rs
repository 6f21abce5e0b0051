//! Container file to thumbnail pipeline
//!
//! Loads a container, runs the scanner and keeps an owned copy of the
//! selected image so the mapping can be released.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, ThumbnailError};
use crate::extractor::{extract_all, select_best};
use crate::naming::{candidate_name, thumbnail_name};
use crate::report::ThumbnailReport;
use crate::source::SourceFile;
use crate::types::SelectionStrategy;

/// The selected embedded image and what was learned while finding it
#[derive(Debug, Clone)]
pub struct Thumbnail {
    data: Vec<u8>,
    report: ThumbnailReport,
}

impl Thumbnail {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn report(&self) -> &ThumbnailReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Scans an in-memory container. `None` when no image is embedded.
pub fn thumbnail_from_bytes(
    source: &Path,
    data: &[u8],
    strategy: SelectionStrategy,
) -> Option<Thumbnail> {
    let candidates = extract_all(data);
    let selected = select_best(&candidates, strategy)?;

    debug!(
        source = %source.display(),
        found = candidates.len(),
        offset = selected.offset(),
        len = selected.len(),
        %strategy,
        "selected thumbnail"
    );

    let report = ThumbnailReport::new(
        source,
        data.len() as u64,
        strategy,
        &candidates,
        &selected,
    );

    Some(Thumbnail {
        data: selected.to_vec(),
        report,
    })
}

/// Loads `path` and extracts its thumbnail according to `config`.
pub fn extract_thumbnail(path: impl AsRef<Path>, config: &Config) -> Result<Thumbnail> {
    let path = path.as_ref();
    let source = SourceFile::open(path, config)?;

    thumbnail_from_bytes(path, source.bytes(), config.strategy)
        .ok_or_else(|| ThumbnailError::NoImageFound(path.to_path_buf()))
}

/// Extracts the thumbnail of `path` and writes it into `output_dir`.
pub fn save_thumbnail(
    path: impl AsRef<Path>,
    output_dir: &Path,
    config: &Config,
) -> Result<(Thumbnail, PathBuf)> {
    let path = path.as_ref();
    let thumbnail = extract_thumbnail(path, config)?;
    let output = output_dir.join(thumbnail_name(path, config));

    write_image(&output, thumbnail.data(), config.overwrite)?;
    info!(
        source = %path.display(),
        output = %output.display(),
        bytes = thumbnail.len(),
        "wrote thumbnail"
    );

    Ok((thumbnail, output))
}

/// Writes every embedded image of `path` into `output_dir`, in scan order.
pub fn save_all_candidates(
    path: impl AsRef<Path>,
    output_dir: &Path,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let source = SourceFile::open(path, config)?;
    let candidates = extract_all(source.bytes());

    if candidates.is_empty() {
        return Err(ThumbnailError::NoImageFound(path.to_path_buf()));
    }

    let mut written = Vec::with_capacity(candidates.len());
    for (i, candidate) in candidates.iter().enumerate() {
        let output = output_dir.join(candidate_name(path, config, i));
        write_image(&output, candidate.as_bytes(), config.overwrite)?;
        written.push(output);
    }

    info!(
        source = %path.display(),
        count = written.len(),
        "wrote all embedded images"
    );

    Ok(written)
}

/// Writes `data` to `path`, creating parent directories.
///
/// Without `overwrite` the file is created atomically, so concurrent writers
/// targeting the same name cannot replace each other's output.
pub fn write_image(path: &Path, data: &[u8], overwrite: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let opened = if overwrite {
        File::create(path)
    } else {
        OpenOptions::new().write(true).create_new(true).open(path)
    };

    let mut out = match opened {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ThumbnailError::OutputExists(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    out.write_all(data)?;
    out.sync_all()?;
    Ok(())
}
