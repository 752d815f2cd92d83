//! Standard event error hooks.

pub mod logging;

pub use logging::LoggingHook;
