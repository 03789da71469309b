use std::fmt;

use clap::ValueEnum;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::file::image_file::ImageFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    Png,
    Bmp,
    Ppm,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Bmp => write!(f, "bmp"),
            Self::Ppm => write!(f, "ppm"),
        }
    }
}

#[must_use]
pub fn file_presenter_factory(format: ExportFormat) -> Box<dyn FilePresenterPort> {
    match format {
        ExportFormat::Png => Box::new(ImageFilePresenter::png()),
        ExportFormat::Bmp => Box::new(ImageFilePresenter::bmp()),
        ExportFormat::Ppm => Box::new(PpmFilePresenter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_extension_matches_format_name() {
        for format in [ExportFormat::Png, ExportFormat::Bmp, ExportFormat::Ppm] {
            assert_eq!(file_presenter_factory(format).extension(), format.to_string());
        }
    }
}
