//! Pixel format conversion for presentation surfaces.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialPixel { src_len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialPixel { src_len } => {
                write!(f, "RGB source length {} is not a multiple of 3", src_len)
            }
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "RGBA destination holds {} bytes, expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into an RGBA surface with opaque alpha. The
/// destination is left untouched if the sizes disagree.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialPixel { src_len: src.len() });
    }

    let expected = src.len() / 3 * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let src = [
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
        ];
        let mut dst = [0; 12];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, [255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_empty_buffers() {
        let mut dst: [u8; 0] = [];

        assert_eq!(copy_rgb_to_rgba(&[], &mut dst), Ok(()));
    }

    #[test]
    fn test_partial_pixel_rejected() {
        let mut dst = [0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::PartialPixel { src_len: 4 })
        );
    }

    #[test]
    fn test_wrong_destination_size_leaves_it_untouched() {
        let mut dst = [9; 7];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst),
            Err(PixelFormatError::LengthMismatch {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(dst, [9; 7]);
    }
}
