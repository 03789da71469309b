#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Waiting for input; a redraw may be pending.
    #[default]
    Idle,
    /// A render pass is in flight.
    Rendering,
    /// A complete frame is waiting to be presented.
    PresentReady,
}
