//! The per-frame synchronization protocol between the coordinator and the
//! two renderer loops.

pub mod duplex;
pub mod messages;
