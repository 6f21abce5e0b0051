//! PNG byte patterns used to bound embedded images.
//!
//! Only the leading signature and the IEND trailer are recognised. Nothing in
//! between is parsed or checked.

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// `IEND` chunk type followed by its fixed CRC (`0xAE426082`).
pub const PNG_IEND_MARKER: [u8; 8] = [0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82];

/// Distance from the start of the IEND marker to the end of an image.
pub const IEND_TAIL_LEN: usize = 12;

/// Signature + IHDR chunk + empty IDAT chunk + IEND chunk.
pub const MIN_PNG_LEN: usize = 57;

/// Upper bound on how far past a signature the trailer is searched for.
pub const MAX_END_SEARCH: usize = 50 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_length_is_smallest_structural_png() {
        let ihdr = 4 + 4 + 13 + 4;
        let empty_chunk = 4 + 4 + 4;
        assert_eq!(MIN_PNG_LEN, PNG_SIGNATURE.len() + ihdr + empty_chunk * 2);
    }

    #[test]
    fn marker_carries_iend_type_and_crc() {
        assert_eq!(&PNG_IEND_MARKER[..4], b"IEND");
        assert_eq!(
            u32::from_be_bytes([
                PNG_IEND_MARKER[4],
                PNG_IEND_MARKER[5],
                PNG_IEND_MARKER[6],
                PNG_IEND_MARKER[7]
            ]),
            0xAE42_6082
        );
    }
}
