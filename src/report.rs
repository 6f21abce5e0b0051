use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::naming::format_size;
use crate::types::{Candidate, Offset, SelectionStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateInfo {
    pub offset: Offset,
    pub offset_hex: HexOffset,
    pub len: usize,
}

/// Serialises as `0x`-prefixed, zero padded hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexOffset(pub Offset);

impl Serialize for HexOffset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{:08X}", self.0))
    }
}

impl From<&Candidate<'_>> for CandidateInfo {
    fn from(c: &Candidate<'_>) -> Self {
        Self {
            offset: c.offset(),
            offset_hex: HexOffset(c.offset()),
            len: c.len(),
        }
    }
}

/// Summary of one container scan
#[derive(Debug, Clone, Serialize)]
pub struct ThumbnailReport {
    pub source: PathBuf,
    pub source_size: u64,
    pub source_size_human: String,
    pub strategy: SelectionStrategy,
    pub candidates: Vec<CandidateInfo>,
    pub selected: CandidateInfo,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub sha256: String,
}

impl ThumbnailReport {
    pub fn new(
        source: &Path,
        source_size: u64,
        strategy: SelectionStrategy,
        candidates: &[Candidate<'_>],
        selected: &Candidate<'_>,
    ) -> Self {
        let dimensions = image_dimensions(selected.as_bytes());

        Self {
            source: source.to_path_buf(),
            source_size,
            source_size_human: format_size(source_size),
            strategy,
            candidates: candidates.iter().map(CandidateInfo::from).collect(),
            selected: CandidateInfo::from(selected),
            width: dimensions.map(|(w, _)| w),
            height: dimensions.map(|(_, h)| h),
            sha256: sha256_hex(selected.as_bytes()),
        }
    }

    /// `W × H px` when the header could be read.
    pub fn dimensions_label(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{} × {} px", w, h)),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Reads the pixel size from the IHDR chunk without decoding.
pub fn image_dimensions(data: &[u8]) -> Option<(usize, usize)> {
    imagesize::blob_size(data)
        .ok()
        .map(|size| (size.width, size.height))
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_known_input() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn garbage_has_no_dimensions() {
        assert_eq!(image_dimensions(&[0u8; 16]), None);
    }

    #[test]
    fn hex_offset_serialises_padded() {
        let json = serde_json::to_string(&HexOffset(0x1F)).unwrap();
        assert_eq!(json, "\"0x0000001F\"");
    }
}
