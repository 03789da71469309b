use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &'static str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        let file = File::create(filepath)?;
        write_ppm(buffer, BufWriter::new(file))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_ppm_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let buffer = PixelBuffer::from_data(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n1 2\n255\n"));
        assert!(bytes.ends_with(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.ppm");
        let buffer = PixelBuffer::new(1, 1).unwrap();

        let result = PpmFilePresenter::new().present(&buffer, &path);

        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
