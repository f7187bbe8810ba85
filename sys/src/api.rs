//! Capability table layouts
//!
//! `#[repr(C)]` mirrors of the Playdate SDK tables. Only the leading fields
//! the bindings use are declared; the host's tables continue past them, so
//! these types must only ever be reached through host-provided pointers.

use core::ffi::{c_char, c_float, c_int, c_uint, c_void};

/// Variadic `printf`-style sink (`logToConsole`, `error`).
pub type LogFn = unsafe extern "C" fn(fmt: *const c_char, ...);

/// Per-frame callback registered with `setUpdateCallback`.
///
/// Returns non-zero when the display should be updated.
pub type UpdateCallback = unsafe extern "C" fn(userdata: *mut c_void) -> c_int;

/// Root capability table (`PlaydateAPI`).
#[repr(C)]
pub struct PlaydateApi {
    pub system: *const PlaydateSys,
    pub file: *const c_void,
    pub graphics: *const c_void,
    pub sprite: *const c_void,
    pub display: *const PlaydateDisplay,
    pub sound: *const PlaydateSound,
    pub lua: *const c_void,
    pub json: *const c_void,
    pub scoreboards: *const c_void,
}

/// `playdate_sys` prefix.
#[repr(C)]
pub struct PlaydateSys {
    pub realloc: Option<unsafe extern "C" fn(ptr: *mut c_void, size: usize) -> *mut c_void>,
    pub format_string:
        Option<unsafe extern "C" fn(ret: *mut *mut c_char, fmt: *const c_char, ...) -> c_int>,
    pub log_to_console: Option<LogFn>,
    pub error: Option<LogFn>,
    pub get_language: Option<unsafe extern "C" fn() -> c_int>,
    pub get_current_time_milliseconds: Option<unsafe extern "C" fn() -> c_uint>,
    pub get_seconds_since_epoch: Option<unsafe extern "C" fn(milliseconds: *mut c_uint) -> c_uint>,
    pub draw_fps: Option<unsafe extern "C" fn(x: c_int, y: c_int)>,
    pub set_update_callback:
        Option<unsafe extern "C" fn(update: Option<UpdateCallback>, userdata: *mut c_void)>,
    pub get_button_state: Option<
        unsafe extern "C" fn(current: *mut Buttons, pushed: *mut Buttons, released: *mut Buttons),
    >,
    pub set_peripherals_enabled: Option<unsafe extern "C" fn(mask: Peripherals)>,
    pub get_accelerometer:
        Option<unsafe extern "C" fn(outx: *mut c_float, outy: *mut c_float, outz: *mut c_float)>,
    pub get_crank_change: Option<unsafe extern "C" fn() -> c_float>,
    pub get_crank_angle: Option<unsafe extern "C" fn() -> c_float>,
    pub is_crank_docked: Option<unsafe extern "C" fn() -> c_int>,
}

/// `playdate_display` prefix.
#[repr(C)]
pub struct PlaydateDisplay {
    pub get_width: Option<unsafe extern "C" fn() -> c_int>,
    pub get_height: Option<unsafe extern "C" fn() -> c_int>,
    pub set_refresh_rate: Option<unsafe extern "C" fn(rate: c_float)>,
}

/// `playdate_sound` prefix.
#[repr(C)]
pub struct PlaydateSound {
    pub channel: *const c_void,
    pub fileplayer: *const PlaydateSoundFileplayer,
}

/// Opaque host file player.
#[repr(C)]
pub struct FilePlayer {
    _private: [u8; 0],
}

/// `playdate_sound_fileplayer` prefix.
#[repr(C)]
pub struct PlaydateSoundFileplayer {
    pub new_player: Option<unsafe extern "C" fn() -> *mut FilePlayer>,
    pub free_player: Option<unsafe extern "C" fn(player: *mut FilePlayer)>,
    pub load_into_player:
        Option<unsafe extern "C" fn(player: *mut FilePlayer, path: *const c_char) -> c_int>,
    pub set_buffer_length: Option<unsafe extern "C" fn(player: *mut FilePlayer, len: c_float)>,
    pub play: Option<unsafe extern "C" fn(player: *mut FilePlayer, repeat: c_int) -> c_int>,
    pub is_playing: Option<unsafe extern "C" fn(player: *mut FilePlayer) -> c_int>,
    pub pause: Option<unsafe extern "C" fn(player: *mut FilePlayer)>,
    pub stop: Option<unsafe extern "C" fn(player: *mut FilePlayer)>,
    pub set_volume:
        Option<unsafe extern "C" fn(player: *mut FilePlayer, left: c_float, right: c_float)>,
}

/// `PDSystemEvent`
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemEvent {
    Init = 0,
    InitLua = 1,
    Lock = 2,
    Unlock = 3,
    Pause = 4,
    Resume = 5,
    Terminate = 6,
    KeyPressed = 7,
    KeyReleased = 8,
    LowPower = 9,
}

impl TryFrom<u32> for SystemEvent {
    type Error = u32;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Ok(match raw {
            0 => Self::Init,
            1 => Self::InitLua,
            2 => Self::Lock,
            3 => Self::Unlock,
            4 => Self::Pause,
            5 => Self::Resume,
            6 => Self::Terminate,
            7 => Self::KeyPressed,
            8 => Self::KeyReleased,
            9 => Self::LowPower,
            other => return Err(other),
        })
    }
}

bitflags::bitflags! {
    /// `PDButtons`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: c_uint {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const B = 1 << 4;
        const A = 1 << 5;
    }
}

bitflags::bitflags! {
    /// `PDPeripherals`
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Peripherals: c_uint {
        const NONE = 0;
        const ACCELEROMETER = 1 << 0;
    }
}
