//! Erythrina raw Playdate bindings
//!
//! The lowest layer between a game and the Playdate runtime. It provides:
//!
//! - [`playdate`] - the process-wide slot holding the runtime's `PlaydateAPI*`
//! - [`call_log_to_console`] - a trampoline into the runtime's variadic
//!   `logToConsole`, for callers that cannot make variadic calls themselves
//! - [`api`] - `#[repr(C)]` prefixes of the capability tables
//!
//! # Lifecycle
//!
//! The runtime hands its API table to the game's `eventHandler` on
//! `kEventInit`. That pointer must be stored with [`set_api`] before anything
//! else touches the slot. Nothing here enforces that ordering.
//!
//! ```rust,ignore
//! use erythrina_sys::{PlaydateApi, SystemEvent, set_api};
//!
//! #[unsafe(no_mangle)]
//! pub extern "C" fn eventHandler(api: *mut PlaydateApi, event: u32, _arg: u32) -> i32 {
//!     if event == SystemEvent::Init as u32 {
//!         set_api(api);
//!     }
//!     0
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod api;
mod handle;
mod log;


pub use api::{
    Buttons, FilePlayer, LogFn, Peripherals, PlaydateApi, PlaydateDisplay, PlaydateSound,
    PlaydateSoundFileplayer, PlaydateSys, SystemEvent, UpdateCallback,
};
pub use handle::{api, api_unchecked, playdate, raw_api, set_api};
pub use log::call_log_to_console;
