/// Discrete input delivered once per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    ScrollIn,
    ScrollOut,
}

/// Keys held down at the moment of the poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub escape: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputPoll {
    pub events: Vec<InputEvent>,
    pub keys: KeyState,
}
