//! Signature scanning over a resident container buffer.
//!
//! The container format itself is never parsed: an embedded image is anything
//! that starts with the PNG signature and is closed by an IEND trailer within
//! [`MAX_END_SEARCH`] bytes.

use memchr::memmem;
use tracing::{debug, trace};

use crate::formats::png::{
    IEND_TAIL_LEN, MAX_END_SEARCH, MIN_PNG_LEN, PNG_IEND_MARKER, PNG_SIGNATURE,
};
use crate::types::{Candidate, Offset, SelectionStrategy};

/// Returns every embedded PNG in ascending offset order.
///
/// Candidates never overlap: once an image is bounded the scan resumes after
/// its end, so signatures inside it are not looked at. An empty result means
/// nothing was found.
pub fn extract_all(data: &[u8]) -> Vec<Candidate<'_>> {
    let start_finder = memmem::Finder::new(&PNG_SIGNATURE);
    let end_finder = memmem::Finder::new(&PNG_IEND_MARKER);
    let mut images = Vec::new();
    let mut cursor: Offset = 0;

    while cursor < data.len() {
        let Some(pos) = start_finder.find(&data[cursor..]) else {
            break;
        };
        let start = cursor + pos;

        match find_end_with(&end_finder, data, start) {
            Some(end) if end - start >= MIN_PNG_LEN => {
                let stop = end.min(data.len());
                debug!(offset = start, len = stop - start, "found embedded png");
                images.push(Candidate::new(start, &data[start..stop]));
                cursor = end;
            }
            Some(end) => {
                trace!(offset = start, len = end - start, "png too short, skipping");
                cursor = start + 1;
            }
            None => {
                trace!(offset = start, "no IEND trailer in range, skipping");
                cursor = start + 1;
            }
        }
    }

    images
}

/// Locates the end of the image whose signature sits at `start`.
///
/// Returns the position of the first IEND marker after the signature plus
/// [`IEND_TAIL_LEN`]. The marker has to lie entirely within `MAX_END_SEARCH`
/// bytes of `start` and within the buffer. The returned offset may point past
/// the end of `data` when the buffer stops right after the marker.
pub fn find_end(data: &[u8], start: Offset) -> Option<Offset> {
    let finder = memmem::Finder::new(&PNG_IEND_MARKER);
    find_end_with(&finder, data, start)
}

fn find_end_with(finder: &memmem::Finder<'_>, data: &[u8], start: Offset) -> Option<Offset> {
    let from = start.checked_add(PNG_SIGNATURE.len())?;
    let limit = start.saturating_add(MAX_END_SEARCH).min(data.len());
    let window = data.get(from..limit)?;

    finder
        .find(window)
        .map(|pos| from + pos + IEND_TAIL_LEN)
}

/// Picks one candidate according to `strategy`.
///
/// Ties under `Smallest` and `Largest` go to the earliest candidate.
pub fn select_best<'a>(
    candidates: &[Candidate<'a>],
    strategy: SelectionStrategy,
) -> Option<Candidate<'a>> {
    match candidates {
        [] => None,
        [only] => Some(*only),
        [first, rest @ ..] => {
            let best = match strategy {
                SelectionStrategy::Smallest => rest
                    .iter()
                    .fold(first, |best, c| if c.len() < best.len() { c } else { best }),
                SelectionStrategy::Largest => rest
                    .iter()
                    .fold(first, |best, c| if c.len() > best.len() { c } else { best }),
                SelectionStrategy::First => first,
            };
            Some(*best)
        }
    }
}
