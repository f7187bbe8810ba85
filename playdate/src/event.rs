//! System event dispatch for the game's `eventHandler` export

use erythrina_sys::{PlaydateApi, SystemEvent, set_api};

use crate::error::{PlaydateError, Result};

/// Decode a raw `PDSystemEvent`, populating the runtime handle on `Init`.
///
/// Call this first from the exported `eventHandler`; every other binding
/// reads the handle stored here.
///
/// ```rust,ignore
/// #[unsafe(no_mangle)]
/// pub extern "C" fn eventHandler(api: *mut PlaydateApi, event: u32, _arg: u32) -> i32 {
///     if let Ok(SystemEvent::Init) = erythrina_playdate::handle_event(api, event) {
///         erythrina_playdate::display::set_refresh_rate(0.0).ok();
///     }
///     0
/// }
/// ```
pub fn handle_event(api: *mut PlaydateApi, event: u32) -> Result<SystemEvent> {
    let event = SystemEvent::try_from(event).map_err(PlaydateError::UnknownEvent)?;
    if event == SystemEvent::Init {
        set_api(api);
    }
    Ok(event)
}
