use std::time::Duration;

use log::debug;
use winit::event::{Event, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::controllers::interactive::events::input::{InputEvent, InputPoll};
use crate::controllers::interactive::ports::input_source::InputSource;
use crate::input::gui::held_keys::HeldKeys;

/// How long a poll waits for window events before handing control back.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Feeds window events into the interaction loop by pumping the winit
/// event loop once per poll.
pub struct WinitInputSource {
    event_loop: EventLoop<()>,
    held: HeldKeys,
    timeout: Duration,
}

impl WinitInputSource {
    pub fn new(event_loop: EventLoop<()>) -> Self {
        Self {
            event_loop,
            held: HeldKeys::default(),
            timeout: POLL_TIMEOUT,
        }
    }
}

impl InputSource for WinitInputSource {
    fn poll(&mut self) -> InputPoll {
        let mut events = Vec::new();
        let held = &mut self.held;

        let status = self.event_loop.pump_events(Some(self.timeout), |event, _| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => events.push(InputEvent::Quit),
                WindowEvent::MouseWheel { delta, .. } => events.extend(scroll_event(delta)),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state,
                            ..
                        },
                    ..
                } => events.extend(held.handle_key_event(code, state)),
                WindowEvent::Focused(false) => held.reset(),
                _ => {}
            }
        });

        if let PumpStatus::Exit(code) = status {
            debug!("event loop exited with code {}", code);
            events.push(InputEvent::Quit);
        }

        InputPoll {
            events,
            keys: self.held.snapshot(),
        }
    }
}

/// Wheel up zooms in, wheel down zooms out.
fn scroll_event(delta: MouseScrollDelta) -> Option<InputEvent> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(InputEvent::ScrollIn)
    } else if y < 0.0 {
        Some(InputEvent::ScrollOut)
    } else {
        None
    }
}
