use crate::core::viewport::ViewportError;
use crate::protocol::duplex::RendererEnd;
use crate::protocol::messages::FrameReport;
use crate::renderer::context::RendererContext;
use crate::renderer::frame::{caption, compose_frame};
use crate::renderer::ports::window_host::{HostError, HostEvent, WindowHost};
use crate::renderer::roles::RendererRole;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RendererError {
    Viewport(ViewportError),
    Host(HostError),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Host(err) => write!(f, "window host error: {}", err),
        }
    }
}

impl Error for RendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Host(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RendererError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<HostError> for RendererError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

/// Runs one renderer loop to completion.
///
/// Starting: build the full context (viewport, grid, both buffers). Running:
/// one cycle per coordinator directive: absorb C, handle input, render,
/// report. Stopping: return, dropping the host and releasing the window.
/// A stop directive and a closed channel both end the loop cleanly.
pub fn run_renderer<R, H>(
    role: R,
    mut host: H,
    channel: RendererEnd,
    width: u32,
    height: u32,
    max_iters: u32,
) -> Result<(), RendererError>
where
    R: RendererRole,
    H: WindowHost,
{
    let mut ctx = RendererContext::new(&role, width, height, max_iters)?;

    loop {
        let Ok(directive) = channel.await_directive() else {
            // coordinator is gone; shut down instead of hanging
            break;
        };

        if !directive.keep_running {
            break;
        }

        if let Some(c) = role.absorb(ctx.c, &directive) {
            ctx.c = c;
            ctx.recompute(&role);
        }

        for event in host.drain_events() {
            match event {
                HostEvent::CloseRequested => ctx.running = false,
                HostEvent::MouseDown => ctx.left_mouse_down = true,
                HostEvent::MouseUp => ctx.left_mouse_down = false,
                HostEvent::Resized { width, height } => {
                    // a minimized or degenerate window keeps the old buffers
                    if width >= 2 && height >= 2 {
                        ctx.rebuild_for_size(&role, width, height)?;
                    }
                }
            }
        }

        if role.tracks_pointer() && ctx.left_mouse_down {
            if let Some((x, y)) = host.mouse_position() {
                ctx.c = ctx.viewport.screen_to_complex(x, y);
            }
        }

        if ctx.running {
            let frame = compose_frame(&ctx);
            host.present(&frame)?;
            host.set_caption(&caption(role.caption_base(), ctx.c));
        }

        let report = FrameReport {
            c: role.reported_c(ctx.c),
            running: ctx.running,
        };
        if channel.report(report).is_err() {
            break;
        }
    }

    Ok(())
}
