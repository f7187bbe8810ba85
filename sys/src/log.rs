//! Logging trampoline

use core::ffi::{c_char, c_void};

use crate::api::LogFn;

/// Call the host's variadic `logToConsole`-style function with `msg`.
///
/// `msg` goes through a literal `"%s"` format, so `%` sequences in it are
/// printed as text and never read as conversions.
///
/// # Safety
///
/// - `fn_ptr` must point to a function with the [`LogFn`] signature.
/// - `msg` must be a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn call_log_to_console(fn_ptr: *const c_void, msg: *const c_char) {
    debug_assert!(!fn_ptr.is_null(), "call_log_to_console: null log function");

    // SAFETY: the caller guarantees fn_ptr has the LogFn signature.
    let log: LogFn = unsafe { core::mem::transmute::<*const c_void, LogFn>(fn_ptr) };
    unsafe { log(c"%s".as_ptr(), msg) };
}
