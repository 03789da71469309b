use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_failure::RenderFailure;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_renderer::FrameRendererPort;
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::data::viewport::Viewport;

struct SharedState {
    generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Viewport)>>,
    wake: Condvar,
    shutdown: AtomicBool,
}

/// Renders on a dedicated thread so the caller can keep polling input.
///
/// Every submission gets a new generation number. A pass still running for
/// an older generation is cancelled at its next row boundary, and only
/// results for the newest generation are sent back.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    events: Receiver<RenderEvent>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn spawn<R>(renderer: R) -> io::Result<Self>
    where
        R: FrameRendererPort + Send + 'static,
    {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
        });

        let (sender, events) = mpsc::channel();
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("render-worker".to_string())
            .spawn(move || Self::worker_loop(&worker_shared, &renderer, &sender))?;

        Ok(Self {
            shared,
            events,
            worker: Some(worker),
        })
    }

    /// Queues `viewport` for rendering, replacing any request not yet picked
    /// up, and returns its generation.
    pub fn submit(&self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, viewport));
        }

        self.shared.wake.notify_one();

        generation
    }

    #[cfg(test)]
    fn current_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    pub fn try_recv(&self) -> Option<RenderEvent> {
        self.events.try_recv().ok()
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<RenderEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    pub fn shutdown(&mut self) {
        {
            // the worker checks the flag under this lock before waiting
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked during shutdown");
            }
        }
    }

    fn worker_loop<R: FrameRendererPort>(
        shared: &SharedState,
        renderer: &R,
        sender: &Sender<RenderEvent>,
    ) {
        loop {
            let (job_generation, viewport) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = renderer.render(viewport, &cancel);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                debug!("dropping stale generation {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    viewport,
                    pixel_buffer,
                    render_duration,
                }),
                Err(RenderError::Cancelled) => continue,
                Err(error) => RenderEvent::Error(RenderFailure {
                    generation: job_generation,
                    error,
                }),
            };

            if sender.send(event).is_err() {
                return;
            }
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
