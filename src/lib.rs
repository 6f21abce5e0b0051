//! Pulls the embedded PNG preview out of Affinity design documents.
//!
//! The container is treated as opaque bytes: [`extract_all`] finds every PNG
//! stream by its signature and IEND trailer, [`select_best`] picks one.

pub mod config;
mod error;
pub mod extractor;
pub mod formats;
pub mod naming;
pub mod report;
pub mod source;
pub mod thumbnail;
pub mod types;

pub use config::Config;
pub use error::{Result, ThumbnailError};
pub use extractor::{extract_all, find_end, select_best};
pub use report::ThumbnailReport;
pub use source::SourceFile;
pub use thumbnail::{extract_thumbnail, save_all_candidates, save_thumbnail, Thumbnail};
pub use types::{Candidate, Offset, SelectionStrategy};
