//! Process-wide runtime handle

use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::api::PlaydateApi;

/// The runtime's capability table, populated by the host before the game runs.
///
/// Exported unmangled so C code declaring `extern PlaydateAPI* playdate;`
/// links against the same slot. `AtomicPtr<T>` has the same in-memory
/// representation as `*mut T`.
///
/// Null until [`set_api`] runs. The slot is written once, before any reader,
/// and never freed here; the table is owned by the host.
#[allow(non_upper_case_globals)]
#[unsafe(no_mangle)]
pub static playdate: AtomicPtr<PlaydateApi> = AtomicPtr::new(ptr::null_mut());

/// Store the host's table in [`playdate`].
///
/// No validation is performed; a null or dangling pointer is stored as-is.
pub fn set_api(api: *mut PlaydateApi) {
    playdate.store(api, Ordering::Release);
}

/// Current contents of [`playdate`].
pub fn raw_api() -> *mut PlaydateApi {
    playdate.load(Ordering::Acquire)
}

/// The host's table, or `None` before population.
pub fn api() -> Option<&'static PlaydateApi> {
    // SAFETY: a non-null slot holds a host table that lives for the process.
    unsafe { raw_api().as_ref() }
}

/// The host's table without the population check.
///
/// # Safety
///
/// [`set_api`] must already have stored a valid table pointer.
pub unsafe fn api_unchecked() -> &'static PlaydateApi {
    unsafe { &*raw_api() }
}
