use crate::controllers::interactive::events::input::InputPoll;

/// Polled once per controller step. Must not block for long; the controller
/// renders between polls.
pub trait InputSource {
    fn poll(&mut self) -> InputPoll;
}
