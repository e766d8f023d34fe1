use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    OpenFailed { reason: String },
    PresentFailed { reason: String },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFailed { reason } => write!(f, "failed to open window: {}", reason),
            Self::PresentFailed { reason } => write!(f, "failed to present frame: {}", reason),
        }
    }
}

impl Error for HostError {}

/// Window-system events a renderer loop reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HostEvent {
    CloseRequested,
    MouseDown,
    MouseUp,
    Resized { width: u32, height: u32 },
}

/// Port over one window owned by a renderer loop.
///
/// Everything behind this trait is thin I/O: event polling, pixel blitting
/// and the caption. The host is created inside the renderer's own thread and
/// never leaves it.
pub trait WindowHost {
    /// Returns the events that arrived since the previous frame.
    fn drain_events(&mut self) -> Vec<HostEvent>;

    /// Current cursor position in window coordinates, if known.
    fn mouse_position(&self) -> Option<(f64, f64)>;

    /// Blits a finished frame; implementations enforce the frame-rate cap here.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), HostError>;

    /// Updates the window caption (doubles as the text readout of C).
    fn set_caption(&mut self, caption: &str);
}

/// Factory for window hosts, one per renderer loop.
///
/// `Send + Clone` so the coordinator can hand one copy to each renderer
/// thread; the hosts themselves are constructed in-thread.
pub trait WindowSystem: Clone + Send + 'static {
    type Host: WindowHost;

    fn open(&self, caption: &str, width: u32, height: u32) -> Result<Self::Host, HostError>;
}
