//! Erythrina Playdate bindings
//!
//! Safe wrappers over the runtime table exposed by [`erythrina_sys`].
//!
//! # Architecture
//!
//! - [`handle_event`] - populates the runtime handle from `eventHandler`
//! - [`system`] - console logging, buttons, crank, timing
//! - [`display`] - screen size and refresh rate
//! - [`FilePlayer`] - streamed audio playback
//! - [`ConsoleLogger`] - `log` backend writing to the runtime console
//!
//! Every wrapper returns [`PlaydateError::ApiNotInitialized`] until the
//! handle is populated.

pub mod config;
pub mod display;
pub mod error;
mod event;
mod logger;
pub mod sound;
pub mod system;
#[cfg(test)]
mod test_utils;

pub use config::LoggerConfig;
pub use erythrina_sys::{Buttons, Peripherals, SystemEvent};
pub use error::{PlaydateError, Result};
pub use event::handle_event;
pub use logger::{ConsoleLogger, init as init_logger};
pub use sound::FilePlayer;
pub use system::{ButtonState, log_to_console};
