use std::fmt;
use std::num::NonZeroUsize;

use clap::ValueEnum;
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_bands::render_bands_rayon::render_bands_rayon;
use crate::core::actions::render_bands::render_bands_scoped_threads::render_bands_scoped_threads;
use crate::core::actions::render_bands::render_bands_serial::render_bands_serial;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SchedulerKind {
    /// Fresh scoped threads for every pass.
    #[default]
    #[value(name = "scoped")]
    ScopedThreads,
    /// A rayon pool kept alive across passes.
    Rayon,
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScopedThreads => write!(f, "scoped threads"),
            Self::Rayon => write!(f, "rayon"),
        }
    }
}

enum Backend {
    ScopedThreads,
    Rayon(ThreadPool),
}

/// Splits a frame into row bands and renders them in parallel. A single
/// worker always renders on the calling thread.
pub struct TileScheduler {
    workers: NonZeroUsize,
    backend: Backend,
}

impl fmt::Debug for TileScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileScheduler")
            .field("workers", &self.workers)
            .field("kind", &self.kind())
            .finish()
    }
}

impl TileScheduler {
    pub fn new(kind: SchedulerKind, workers: NonZeroUsize) -> Result<Self, RenderError> {
        let backend = match kind {
            SchedulerKind::ScopedThreads => Backend::ScopedThreads,
            SchedulerKind::Rayon => Backend::Rayon(
                ThreadPoolBuilder::new()
                    .num_threads(workers.get())
                    .thread_name(|index| format!("band-pool-{}", index))
                    .build()?,
            ),
        };

        Ok(Self { workers, backend })
    }

    #[must_use]
    pub fn sequential() -> Self {
        Self {
            workers: NonZeroUsize::MIN,
            backend: Backend::ScopedThreads,
        }
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    #[must_use]
    pub fn kind(&self) -> SchedulerKind {
        match self.backend {
            Backend::ScopedThreads => SchedulerKind::ScopedThreads,
            Backend::Rayon(_) => SchedulerKind::Rayon,
        }
    }

    /// Renders a complete frame into a freshly allocated buffer. On any
    /// failure the partially written buffer is dropped.
    pub fn render<Alg, CMap, C>(
        &self,
        params: &RenderParams,
        algorithm: &Alg,
        colour_map: &CMap,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderError>
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
        C: CancelToken + ?Sized,
    {
        let mut buffer = PixelBuffer::new(params.width(), params.height())?;

        debug!(
            "rendering {}x{} with {} {} worker(s)",
            params.width(),
            params.height(),
            self.workers,
            self.kind()
        );

        if self.workers.get() == 1 {
            render_bands_serial(&mut buffer, algorithm, colour_map, cancel)?;
            return Ok(buffer);
        }

        match &self.backend {
            Backend::ScopedThreads => render_bands_scoped_threads(
                &mut buffer,
                self.workers,
                algorithm,
                colour_map,
                cancel,
            )?,
            Backend::Rayon(pool) => render_bands_rayon(
                pool,
                &mut buffer,
                self.workers,
                algorithm,
                colour_map,
                cancel,
            )?,
        }

        Ok(buffer)
    }
}
