use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::num::ParseFloatError;
use std::path::Path;

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};

pub const DEFAULT_COORDINATES_FILE: &str = "last_coordinates.txt";

#[derive(Debug)]
pub enum CoordinatesError {
    Io(io::Error),
    FieldCount { found: usize },
    Number(ParseFloatError),
    Viewport(ViewportError),
}

impl fmt::Display for CoordinatesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::FieldCount { found } => write!(
                f,
                "expected 3 fields (zoom, real, imaginary) but found {}",
                found
            ),
            Self::Number(err) => write!(f, "invalid number: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for CoordinatesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::FieldCount { .. } => None,
            Self::Number(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<io::Error> for CoordinatesError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseFloatError> for CoordinatesError {
    fn from(err: ParseFloatError) -> Self {
        Self::Number(err)
    }
}

impl From<ViewportError> for CoordinatesError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// One line: `zoom real imag`.
#[must_use]
pub fn format_coordinates(viewport: &Viewport) -> String {
    let pan = viewport.pan();

    format!("{} {} {}\n", viewport.zoom(), pan.real, pan.imag)
}

pub fn parse_coordinates(text: &str) -> Result<Viewport, CoordinatesError> {
    let fields: Vec<&str> = text.split_whitespace().collect();

    let [zoom, real, imag] = fields.as_slice() else {
        return Err(CoordinatesError::FieldCount {
            found: fields.len(),
        });
    };

    Ok(Viewport::new(
        zoom.parse()?,
        Complex::new(real.parse()?, imag.parse()?),
    )?)
}

pub fn save_coordinates(viewport: &Viewport, path: &Path) -> Result<(), CoordinatesError> {
    fs::write(path, format_coordinates(viewport))?;
    Ok(())
}

pub fn load_coordinates(path: &Path) -> Result<Viewport, CoordinatesError> {
    parse_coordinates(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_single_line() {
        let viewport = Viewport::new(1.1, Complex::new(-0.5, 0.25)).unwrap();

        assert_eq!(format_coordinates(&viewport), "1.1 -0.5 0.25\n");
    }

    #[test]
    fn test_saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_COORDINATES_FILE);
        let viewport = Viewport::new(123.456, Complex::new(-0.743643887037151, 0.131825904205330)).unwrap();

        save_coordinates(&viewport, &path).unwrap();

        assert_eq!(load_coordinates(&path).unwrap(), viewport);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(matches!(
            parse_coordinates("1.0 0.0"),
            Err(CoordinatesError::FieldCount { found: 2 })
        ));
    }

    #[test]
    fn test_parse_rejects_garbage_numbers() {
        assert!(matches!(
            parse_coordinates("one 0 0"),
            Err(CoordinatesError::Number(_))
        ));
    }

    #[test]
    fn test_parse_rejects_zero_zoom() {
        assert!(matches!(
            parse_coordinates("0 0 0"),
            Err(CoordinatesError::Viewport(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            load_coordinates(&dir.path().join("absent.txt")),
            Err(CoordinatesError::Io(_))
        ));
    }
}
