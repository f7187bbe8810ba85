//! Display functions

use erythrina_sys::PlaydateDisplay;

use crate::error::{PlaydateError, Result, required};

fn display_table() -> Result<&'static PlaydateDisplay> {
    let api = erythrina_sys::api().ok_or(PlaydateError::ApiNotInitialized)?;
    // SAFETY: host tables live for the whole process.
    unsafe { api.display.as_ref() }.ok_or(PlaydateError::MissingFunction("display"))
}

/// Display width in pixels, accounting for scale.
pub fn width() -> Result<i32> {
    let get = required(display_table()?.get_width, "getWidth")?;
    Ok(unsafe { get() })
}

/// Display height in pixels, accounting for scale.
pub fn height() -> Result<i32> {
    let get = required(display_table()?.get_height, "getHeight")?;
    Ok(unsafe { get() })
}

/// Target frame rate. `0.0` runs the update callback as fast as possible.
pub fn set_refresh_rate(rate: f32) -> Result<()> {
    let set = required(display_table()?.set_refresh_rate, "setRefreshRate")?;
    unsafe { set(rate) };
    Ok(())
}
