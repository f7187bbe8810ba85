//! Error types for the safe bindings

use std::ffi::NulError;

use thiserror::Error;

/// Errors raised while calling into the Playdate runtime
#[derive(Debug, Error)]
pub enum PlaydateError {
    /// The runtime handle has not been populated yet
    #[error("Playdate API used before kEventInit populated the runtime handle")]
    ApiNotInitialized,

    /// A table pointer or function pointer the call needs is null
    #[error("runtime table has no `{0}`")]
    MissingFunction(&'static str),

    /// A string passed to the runtime contains an interior NUL
    #[error("string contains an interior NUL byte: {0}")]
    InteriorNul(#[from] NulError),

    /// The runtime returned a null file player
    #[error("runtime could not allocate a file player")]
    PlayerAlloc,

    /// `loadIntoPlayer` returned 0
    #[error("failed to load `{0}` into file player")]
    LoadFailed(String),

    /// `play` returned 0
    #[error("file player failed to start")]
    PlayFailed,

    /// The event handler received a value outside `PDSystemEvent`
    #[error("unknown system event {0}")]
    UnknownEvent(u32),

    /// Logger configuration could not be parsed
    #[error("invalid logger config: {0}")]
    Config(#[from] toml::de::Error),

    /// Logger configuration could not be read
    #[error("failed to read logger config: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger is already installed
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, PlaydateError>;

/// Unwrap a table entry, naming it in the error when absent.
pub(crate) fn required<T>(entry: Option<T>, name: &'static str) -> Result<T> {
    entry.ok_or(PlaydateError::MissingFunction(name))
}
