use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("File is too large: {size} bytes (max: {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("No PNG thumbnails found in {}", .0.display())]
    NoImageFound(PathBuf),

    #[error("Output already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ThumbnailError>;
