use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::present::PresentError;

pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameData) -> Result<(), PresentError>;
}
