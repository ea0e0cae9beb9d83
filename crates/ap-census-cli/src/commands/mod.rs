//! Command implementations.

pub mod sample;
pub mod watch;

pub use sample::run_sample;
pub use watch::run_watch;
