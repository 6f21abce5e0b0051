#![allow(dead_code)]

use afthumb::formats::png::{PNG_IEND_MARKER, PNG_SIGNATURE};

/// Signature, `gap` filler bytes, IEND marker and the 4 byte tail the scanner
/// counts as part of the image.
pub fn raw_image(gap: usize, fill: u8) -> Vec<u8> {
    let mut out = PNG_SIGNATURE.to_vec();
    out.extend(std::iter::repeat_n(fill, gap));
    out.extend_from_slice(&PNG_IEND_MARKER);
    out.extend_from_slice(&[0u8; 4]);
    out
}

/// A structurally complete PNG: signature, IHDR, empty IDAT and IEND.
/// CRCs other than IEND's are left zeroed since nothing checks them.
pub fn minimal_png(width: u32, height: u32) -> Vec<u8> {
    let mut out = PNG_SIGNATURE.to_vec();

    out.extend_from_slice(&13u32.to_be_bytes());
    out.extend_from_slice(b"IHDR");
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.extend_from_slice(&[8, 6, 0, 0, 0]);
    out.extend_from_slice(&[0u8; 4]);

    out.extend_from_slice(&0u32.to_be_bytes());
    out.extend_from_slice(b"IDAT");
    out.extend_from_slice(&[0u8; 4]);

    out.extend_from_slice(&0u32.to_be_bytes());
    out.extend_from_slice(&PNG_IEND_MARKER);
    out
}

/// Fake container: a header, the given images separated by filler, a footer.
pub fn container(images: &[Vec<u8>]) -> (Vec<u8>, Vec<usize>) {
    let mut data = b"PERSISTENT-AFFINITY-HEADER".to_vec();
    let mut offsets = Vec::new();
    for image in images {
        data.extend_from_slice(&[0x11; 32]);
        offsets.push(data.len());
        data.extend_from_slice(image);
    }
    data.extend_from_slice(&[0xFF; 64]);
    (data, offsets)
}
