use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub type Offset = usize;

/// A PNG stream located inside a container buffer.
///
/// Borrows the scanned buffer; use [`Candidate::to_vec`] to keep the bytes
/// around after the source is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    offset: Offset,
    data: &'a [u8],
}

impl<'a> Candidate<'a> {
    pub(crate) fn new(offset: Offset, data: &'a [u8]) -> Self {
        Self { offset, data }
    }

    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Offset one past the last byte of the candidate.
    #[inline]
    pub fn end(&self) -> Offset {
        self.offset + self.data.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

/// Policy used to pick one image when a container embeds several.
///
/// Design documents usually carry a few renditions of the same preview; the
/// smallest one is the canonical thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SelectionStrategy {
    #[default]
    Smallest,
    Largest,
    First,
}

impl SelectionStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionStrategy::Smallest => "smallest",
            SelectionStrategy::Largest => "largest",
            SelectionStrategy::First => "first",
        }
    }

    /// Unrecognised names fall back to [`SelectionStrategy::First`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "smallest" => SelectionStrategy::Smallest,
            "largest" => SelectionStrategy::Largest,
            "first" => SelectionStrategy::First,
            other => {
                tracing::warn!(strategy = other, "unknown selection strategy, using first");
                SelectionStrategy::First
            }
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for SelectionStrategy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_bounds() {
        let buf = [0u8; 32];
        let c = Candidate::new(4, &buf[4..20]);
        assert_eq!(c.offset(), 4);
        assert_eq!(c.end(), 20);
        assert_eq!(c.len(), 16);
        assert!(!c.is_empty());
    }

    #[test]
    fn strategy_names_are_case_insensitive() {
        assert_eq!(SelectionStrategy::from_name("LARGEST"), SelectionStrategy::Largest);
        assert_eq!(SelectionStrategy::from_name(" smallest "), SelectionStrategy::Smallest);
    }

    #[test]
    fn unknown_strategy_falls_back_to_first() {
        assert_eq!(SelectionStrategy::from_name("median"), SelectionStrategy::First);
        assert_eq!("".parse::<SelectionStrategy>(), Ok(SelectionStrategy::First));
    }

    #[test]
    fn default_strategy_is_smallest() {
        assert_eq!(SelectionStrategy::default(), SelectionStrategy::Smallest);
    }

    #[test]
    fn strategy_deserializes_leniently() {
        let s: SelectionStrategy = serde_json::from_str("\"Largest\"").unwrap();
        assert_eq!(s, SelectionStrategy::Largest);
        let s: SelectionStrategy = serde_json::from_str("\"newest\"").unwrap();
        assert_eq!(s, SelectionStrategy::First);
    }
}
