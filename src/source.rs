//! Loading container files into memory
//!
//! The scanner needs the whole file resident, so files are memory mapped.
//! Extension and size checks happen before anything is mapped.

use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ThumbnailError};

enum Backing {
    Mapped(Mmap),
    Empty,
}

/// A container file made resident for scanning
pub struct SourceFile {
    path: PathBuf,
    backing: Backing,
}

impl SourceFile {
    /// Maps `path` after checking it against `config`.
    pub fn open(path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let path = path.as_ref();

        if !config.is_supported(path) {
            return Err(ThumbnailError::UnsupportedExtension(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let size = file.metadata()?.len();

        if size > config.max_file_size {
            return Err(ThumbnailError::FileTooLarge {
                size,
                max: config.max_file_size,
            });
        }

        // Zero-length mappings are rejected by some platforms.
        let backing = if size == 0 {
            Backing::Empty
        } else {
            // SAFETY: the mapping is read-only and lives as long as `SourceFile`;
            // concurrent truncation of the file by another process is not guarded.
            let mmap = unsafe { Mmap::map(&file) }?;

            #[cfg(unix)]
            {
                let _ = mmap.advise(memmap2::Advice::Sequential);
            }

            Backing::Mapped(mmap)
        };

        debug!(path = %path.display(), size, "loaded container");

        Ok(Self {
            path: path.to_path_buf(),
            backing,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => &mmap[..],
            Backing::Empty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn maps_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.afdesign");
        fs::write(&path, b"container bytes").unwrap();

        let source = SourceFile::open(&path, &Config::default()).unwrap();
        assert_eq!(source.bytes(), b"container bytes");
        assert_eq!(source.len(), 15);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn empty_file_is_empty_buffer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.af");
        fs::write(&path, b"").unwrap();

        let source = SourceFile::open(&path, &Config::default()).unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn rejects_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.jpg");
        fs::write(&path, b"x").unwrap();

        let err = SourceFile::open(&path, &Config::default()).err().unwrap();
        assert!(matches!(err, ThumbnailError::UnsupportedExtension(_)));
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.afphoto");
        fs::write(&path, vec![0u8; 64]).unwrap();

        let config = Config::default().with_max_file_size(63);
        let err = SourceFile::open(&path, &config).err().unwrap();
        assert!(matches!(
            err,
            ThumbnailError::FileTooLarge { size: 64, max: 63 }
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SourceFile::open("/nonexistent/file.af", &Config::default())
            .err()
            .unwrap();
        assert!(matches!(err, ThumbnailError::Io(_)));
    }
}
