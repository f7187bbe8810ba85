//! System functions: console logging, buttons, crank, timing

use std::ffi::{CString, c_void};

use erythrina_sys::{Buttons, Peripherals, PlaydateSys, UpdateCallback, call_log_to_console};

use crate::error::{PlaydateError, Result, required};

/// The runtime's `playdate_sys` table.
pub(crate) fn sys_table() -> Result<&'static PlaydateSys> {
    let api = erythrina_sys::api().ok_or(PlaydateError::ApiNotInitialized)?;
    // SAFETY: host tables live for the whole process.
    unsafe { api.system.as_ref() }.ok_or(PlaydateError::MissingFunction("system"))
}

/// Write `msg` to the runtime console.
///
/// The message is passed as data, never as a format string.
pub fn log_to_console(msg: &str) -> Result<()> {
    let log = required(sys_table()?.log_to_console, "logToConsole")?;
    let msg = CString::new(msg)?;
    // SAFETY: `log` comes from the host table with the LogFn signature.
    unsafe { call_log_to_console(log as *const c_void, msg.as_ptr()) };
    Ok(())
}

/// Report a fatal error through the runtime's `error` function.
///
/// On device this halts the game and shows `msg`.
pub fn error(msg: &str) -> Result<()> {
    let error = required(sys_table()?.error, "error")?;
    let msg = CString::new(msg)?;
    // SAFETY: `error` shares the LogFn signature.
    unsafe { call_log_to_console(error as *const c_void, msg.as_ptr()) };
    Ok(())
}

/// Milliseconds since an arbitrary runtime-defined epoch.
pub fn current_time_ms() -> Result<u32> {
    let get = required(
        sys_table()?.get_current_time_milliseconds,
        "getCurrentTimeMilliseconds",
    )?;
    Ok(unsafe { get() })
}

/// Button state for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Buttons held down
    pub current: Buttons,
    /// Buttons pressed since the previous frame
    pub pushed: Buttons,
    /// Buttons released since the previous frame
    pub released: Buttons,
}

pub fn button_state() -> Result<ButtonState> {
    let get = required(sys_table()?.get_button_state, "getButtonState")?;
    let mut state = ButtonState::default();
    unsafe { get(&mut state.current, &mut state.pushed, &mut state.released) };
    Ok(state)
}

pub fn set_peripherals_enabled(mask: Peripherals) -> Result<()> {
    let set = required(sys_table()?.set_peripherals_enabled, "setPeripheralsEnabled")?;
    unsafe { set(mask) };
    Ok(())
}

/// Register the per-frame update function.
///
/// # Safety
///
/// `userdata` must stay valid for as long as the runtime may call `update`.
pub unsafe fn set_update_callback(update: UpdateCallback, userdata: *mut c_void) -> Result<()> {
    let set = required(sys_table()?.set_update_callback, "setUpdateCallback")?;
    unsafe { set(Some(update), userdata) };
    Ok(())
}

/// Crank angle in degrees, 0 pointing up, increasing clockwise.
pub fn crank_angle() -> Result<f32> {
    let get = required(sys_table()?.get_crank_angle, "getCrankAngle")?;
    Ok(unsafe { get() })
}

/// Degrees the crank moved since the previous frame.
pub fn crank_change() -> Result<f32> {
    let get = required(sys_table()?.get_crank_change, "getCrankChange")?;
    Ok(unsafe { get() })
}

pub fn is_crank_docked() -> Result<bool> {
    let get = required(sys_table()?.is_crank_docked, "isCrankDocked")?;
    Ok(unsafe { get() } != 0)
}
