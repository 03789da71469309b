use std::io::{self, Write};

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary (P6) PPM image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    // P6 header: magic, dimensions, max channel value
    write!(writer, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_then_raw_bytes() {
        let buffer = PixelBuffer::from_data(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(out, expected);
    }
}
