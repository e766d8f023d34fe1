pub mod cli;
pub mod coordinator;
pub mod core;
#[cfg(feature = "gui")]
pub mod presenters;
pub mod protocol;
pub mod renderer;

pub use coordinator::run;

#[cfg(feature = "gui")]
pub use presenters::minifb_host::MinifbWindowSystem;
