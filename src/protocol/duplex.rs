use crate::protocol::messages::{FrameDirective, FrameReport};
use std::error::Error;
use std::fmt;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

/// The peer's end of the channel pair has been dropped.
///
/// Signals a dead renderer or coordinator; the surviving side reacts by
/// entering coordinated shutdown instead of blocking forever.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChannelClosed;

impl fmt::Display for ChannelClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "synchronization channel closed by peer")
    }
}

impl Error for ChannelClosed {}

/// Coordinator half of one renderer's bidirectional rendezvous channel.
pub struct CoordinatorEnd {
    directives: SyncSender<FrameDirective>,
    reports: Receiver<FrameReport>,
}

/// Renderer half of its bidirectional rendezvous channel.
pub struct RendererEnd {
    directives: Receiver<FrameDirective>,
    reports: SyncSender<FrameReport>,
}

/// Creates one renderer's private channel pair.
///
/// Both directions are zero-capacity, so every send is a blocking rendezvous
/// with the matching receive: the coordinator and the renderer advance in
/// lockstep, one frame at a time, with no buffering or skipping.
#[must_use]
pub fn duplex() -> (CoordinatorEnd, RendererEnd) {
    let (directive_tx, directive_rx) = sync_channel(0);
    let (report_tx, report_rx) = sync_channel(0);

    (
        CoordinatorEnd {
            directives: directive_tx,
            reports: report_rx,
        },
        RendererEnd {
            directives: directive_rx,
            reports: report_tx,
        },
    )
}

impl CoordinatorEnd {
    /// Sends the next go-ahead; blocks until the renderer accepts it.
    pub fn direct(&self, directive: FrameDirective) -> Result<(), ChannelClosed> {
        self.directives.send(directive).map_err(|_| ChannelClosed)
    }

    /// Blocks until the renderer finishes its frame and replies.
    pub fn collect(&self) -> Result<FrameReport, ChannelClosed> {
        self.reports.recv().map_err(|_| ChannelClosed)
    }
}

impl RendererEnd {
    /// Blocks until the coordinator issues the next go-ahead.
    pub fn await_directive(&self) -> Result<FrameDirective, ChannelClosed> {
        self.directives.recv().map_err(|_| ChannelClosed)
    }

    /// Sends the frame reply; blocks until the coordinator collects it.
    pub fn report(&self, report: FrameReport) -> Result<(), ChannelClosed> {
        self.reports.send(report).map_err(|_| ChannelClosed)
    }
}
