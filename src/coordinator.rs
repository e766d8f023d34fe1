//! Drives the two renderer loops in lockstep and relays C between them.

use crate::protocol::duplex::{ChannelClosed, CoordinatorEnd, duplex};
use crate::protocol::messages::FrameDirective;
use crate::renderer::context::DEFAULT_MAX_ITERS;
use crate::renderer::ports::window_host::WindowSystem;
use crate::renderer::roles::RendererRole;
use crate::renderer::roles::julia::JuliaRole;
use crate::renderer::roles::mandelbrot::MandelbrotRole;
use crate::renderer::run::{RendererError, run_renderer};
use std::error::Error;
use std::fmt;
use std::thread::{self, JoinHandle};

#[derive(Debug)]
pub enum CoordinatorError {
    Renderer {
        name: &'static str,
        source: RendererError,
    },
    RendererPanicked {
        name: &'static str,
    },
}

impl fmt::Display for CoordinatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renderer { name, source } => {
                write!(f, "{} renderer failed: {}", name, source)
            }
            Self::RendererPanicked { name } => {
                write!(f, "{} renderer panicked", name)
            }
        }
    }
}

impl Error for CoordinatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Renderer { source, .. } => Some(source),
            Self::RendererPanicked { .. } => None,
        }
    }
}

/// Runs the whole explorer: two renderer threads plus the relay loop.
///
/// Each frame cycle the Mandelbrot loop goes first, its reported C is handed
/// to the Julia loop in the same cycle, and either loop reporting
/// `running: false` triggers a stop directive to both. Both threads are
/// always joined before returning, whether the cycle ended by quit or by a
/// broken channel.
pub fn run<S>(width: u32, height: u32, windows: S) -> Result<(), CoordinatorError>
where
    S: WindowSystem,
{
    println!("Info: starting renderer threads");

    let (mandelbrot, mandelbrot_handle) =
        spawn_renderer("mandelbrot", MandelbrotRole, windows.clone(), width, height);
    let (julia, julia_handle) = spawn_renderer("julia", JuliaRole, windows, width, height);

    match drive(&mandelbrot, &julia) {
        Ok(()) => println!("Info: a renderer requested shutdown"),
        Err(ChannelClosed) => println!("Info: a renderer channel closed, shutting down"),
    }

    // Cascade the stop to both loops; a loop that already exited has dropped
    // its channel end, which is fine here.
    let _ = mandelbrot.direct(FrameDirective::stop());
    let _ = julia.direct(FrameDirective::stop());

    println!("Info: joining renderer threads");
    let mandelbrot_result = join_renderer("mandelbrot", mandelbrot_handle);
    let julia_result = join_renderer("julia", julia_handle);

    mandelbrot_result.and(julia_result)
}

/// One frame cycle after another until a renderer reports it is done.
///
/// Returns `Err` only for a broken channel; a voluntary quit is `Ok`.
/// A renderer that never replies blocks here indefinitely; there are no
/// timeouts in the protocol.
fn drive(mandelbrot: &CoordinatorEnd, julia: &CoordinatorEnd) -> Result<(), ChannelClosed> {
    loop {
        mandelbrot.direct(FrameDirective::keep_going(None))?;
        let mandelbrot_report = mandelbrot.collect()?;

        julia.direct(FrameDirective::keep_going(mandelbrot_report.c))?;
        let julia_report = julia.collect()?;

        if !mandelbrot_report.running || !julia_report.running {
            return Ok(());
        }
    }
}

fn spawn_renderer<R, S>(
    name: &'static str,
    role: R,
    windows: S,
    width: u32,
    height: u32,
) -> (CoordinatorEnd, JoinHandle<Result<(), RendererError>>)
where
    R: RendererRole,
    S: WindowSystem,
{
    let (coordinator_end, renderer_end) = duplex();

    let handle = thread::spawn(move || {
        // the window must be created by the thread that will poll it
        let host = windows
            .open(role.caption_base(), width, height)
            .map_err(RendererError::Host)?;

        println!("Info: {} renderer running", name);
        run_renderer(role, host, renderer_end, width, height, DEFAULT_MAX_ITERS)
    });

    (coordinator_end, handle)
}

fn join_renderer(
    name: &'static str,
    handle: JoinHandle<Result<(), RendererError>>,
) -> Result<(), CoordinatorError> {
    match handle.join() {
        Ok(Ok(())) => Ok(()),
        Ok(Err(source)) => Err(CoordinatorError::Renderer { name, source }),
        Err(_) => Err(CoordinatorError::RendererPanicked { name }),
    }
}
