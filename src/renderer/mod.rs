//! The renderer loop shared by both fractal windows.

pub mod context;
pub mod frame;
pub mod ports;
pub mod roles;
pub mod run;
