//! Concrete window hosts. Only compiled with the `gui` feature.

pub mod minifb_host;
