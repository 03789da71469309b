use std::time::Instant;

use log::{debug, error, trace};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::interactive::InteractiveError;
use crate::controllers::interactive::events::input::{InputEvent, InputPoll};
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_renderer::FrameRendererPort;
use crate::controllers::interactive::ports::input_source::InputSource;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::controllers::interactive::render_worker::RenderWorker;
use crate::controllers::interactive::state::ControllerState;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::data::viewport::{PanDirection, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Render on the controller thread; input waits for the pass.
    #[default]
    Synchronous,
    /// Render on a worker thread; input keeps flowing and stale passes are
    /// cancelled.
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

enum Renderer<R> {
    Synchronous(R),
    Background(RenderWorker),
}

/// Owns the viewport and drives the poll, render, present loop.
///
/// Each [`step`](Self::step) polls input once, applies it to the viewport,
/// renders if anything changed and presents the finished frame. The last
/// presented frame is kept as the last known good one; a failed pass leaves
/// it in place.
pub struct InteractionController<I, P, R> {
    renderer: Renderer<R>,
    input: I,
    presenter: P,
    viewport: Viewport,
    redraw: bool,
    state: ControllerState,
    generation: u64,
    pending: Option<FrameData>,
    last_frame: Option<FrameData>,
    last_error: Option<RenderError>,
    transitions: Vec<(ControllerState, ControllerState)>,
}

impl<I, P, R> InteractionController<I, P, R>
where
    I: InputSource,
    P: FramePresenterPort,
    R: FrameRendererPort + Send + 'static,
{
    pub fn new(
        renderer: R,
        viewport: Viewport,
        input: I,
        presenter: P,
        mode: RenderMode,
    ) -> Result<Self, InteractiveError> {
        let renderer = match mode {
            RenderMode::Synchronous => Renderer::Synchronous(renderer),
            RenderMode::Background => Renderer::Background(
                RenderWorker::spawn(renderer).map_err(InteractiveError::SpawnWorker)?,
            ),
        };

        Ok(Self {
            renderer,
            input,
            presenter,
            viewport,
            redraw: true,
            state: ControllerState::Idle,
            generation: 0,
            pending: None,
            last_frame: None,
            last_error: None,
            transitions: Vec::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn redraw_pending(&self) -> bool {
        self.redraw
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameData> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&RenderError> {
        self.last_error.as_ref()
    }

    /// State transitions made during the most recent step, oldest first.
    #[must_use]
    pub fn step_transitions(&self) -> &[(ControllerState, ControllerState)] {
        &self.transitions
    }

    pub fn run(&mut self) -> Result<(), InteractiveError> {
        while self.step()? == StepOutcome::Continue {}

        debug!("interactive loop finished at {:?}", self.viewport);
        Ok(())
    }

    pub fn step(&mut self) -> Result<StepOutcome, InteractiveError> {
        self.transitions.clear();

        if self.state == ControllerState::PresentReady {
            // a previous presentation failed, retry before taking new input
            self.present_pending()?;
        }

        let poll = self.input.poll();
        if self.apply_input(&poll) == StepOutcome::Quit {
            return Ok(StepOutcome::Quit);
        }

        match self.renderer {
            Renderer::Synchronous(_) if self.redraw => self.render_synchronously(),
            Renderer::Synchronous(_) => {}
            Renderer::Background(_) => {
                if self.redraw {
                    self.submit_to_worker();
                }
                self.collect_from_worker();
            }
        }

        if self.state == ControllerState::PresentReady {
            self.present_pending()?;
        }

        Ok(StepOutcome::Continue)
    }

    fn apply_input(&mut self, poll: &InputPoll) -> StepOutcome {
        for event in &poll.events {
            let changed = match event {
                InputEvent::Quit => return StepOutcome::Quit,
                InputEvent::ScrollIn => self.viewport.zoom_in(),
                InputEvent::ScrollOut => self.viewport.zoom_out(),
            };
            self.redraw |= changed;
        }

        let keys = poll.keys;
        if keys.escape {
            return StepOutcome::Quit;
        }

        for (held, direction) in [
            (keys.left, PanDirection::Left),
            (keys.right, PanDirection::Right),
            (keys.up, PanDirection::Up),
            (keys.down, PanDirection::Down),
        ] {
            if held {
                self.redraw |= self.viewport.pan_by_step(direction);
            }
        }

        StepOutcome::Continue
    }

    fn render_synchronously(&mut self) {
        let Renderer::Synchronous(renderer) = &self.renderer else {
            return;
        };

        // input is not polled during the pass, so Rendering is entered and
        // left within this call
        let start = Instant::now();
        let result = renderer.render(self.viewport, &NeverCancel);
        let render_duration = start.elapsed();

        self.transition(ControllerState::Rendering);
        self.generation += 1;
        self.redraw = false;

        match result {
            Ok(pixel_buffer) => {
                self.pending = Some(FrameData {
                    generation: self.generation,
                    viewport: self.viewport,
                    pixel_buffer,
                    render_duration,
                });
                self.transition(ControllerState::PresentReady);
            }
            Err(err) => self.fail_pass(self.generation, err),
        }
    }

    fn submit_to_worker(&mut self) {
        let Renderer::Background(worker) = &self.renderer else {
            return;
        };

        self.generation = worker.submit(self.viewport);
        self.redraw = false;

        if self.state != ControllerState::Rendering {
            self.transition(ControllerState::Rendering);
        }
    }

    fn collect_from_worker(&mut self) {
        let Renderer::Background(worker) = &self.renderer else {
            return;
        };

        let mut events = Vec::new();
        while let Some(event) = worker.try_recv() {
            events.push(event);
        }

        for event in events {
            match event {
                RenderEvent::Frame(frame) if frame.generation == self.generation => {
                    self.pending = Some(frame);
                    self.transition(ControllerState::PresentReady);
                }
                RenderEvent::Error(failure) if failure.generation == self.generation => {
                    self.fail_pass(failure.generation, failure.error);
                }
                RenderEvent::Frame(frame) => {
                    trace!("ignoring superseded frame {}", frame.generation);
                }
                RenderEvent::Error(failure) => {
                    trace!("ignoring superseded failure: {}", failure);
                }
            }
        }
    }

    fn fail_pass(&mut self, generation: u64, err: RenderError) {
        error!("render pass {} failed: {}", generation, err);
        self.last_error = Some(err);
        self.transition(ControllerState::Idle);
    }

    fn present_pending(&mut self) -> Result<(), InteractiveError> {
        if let Some(frame) = self.pending.take() {
            if let Err(err) = self.presenter.present(&frame) {
                self.pending = Some(frame);
                return Err(err.into());
            }

            debug!(
                "presented generation {} (zoom {}, pan {} {}) rendered in {:?}",
                frame.generation,
                frame.viewport.zoom(),
                frame.viewport.pan().real,
                frame.viewport.pan().imag,
                frame.render_duration
            );
            self.last_frame = Some(frame);
        }

        self.transition(ControllerState::Idle);
        Ok(())
    }

    fn transition(&mut self, next: ControllerState) {
        trace!("{:?} -> {:?}", self.state, next);
        self.transitions.push((self.state, next));
        self.state = next;
    }
}
