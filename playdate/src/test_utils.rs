//! Shared test utilities: a stub Playdate runtime
//!
//! Every stub function records into a thread-local log, so tests running in
//! parallel only see their own calls. All tests install the same stub table,
//! which keeps the process-wide handle stable across threads.

use std::cell::RefCell;
use std::ffi::{CStr, c_char, c_float, c_int, c_uint, c_void};
use std::ptr;
use std::sync::OnceLock;

use erythrina_sys::{
    Buttons, FilePlayer, LogFn, Peripherals, PlaydateApi, PlaydateDisplay, PlaydateSound,
    PlaydateSoundFileplayer, PlaydateSys, UpdateCallback, set_api,
};

/// A call observed by the stub runtime
#[derive(Debug, Clone, PartialEq)]
pub enum StubCall {
    Log { fmt: String, msg: String },
    Error { fmt: String, msg: String },
    SetUpdateCallback,
    SetPeripherals(u32),
    SetRefreshRate(f32),
    LoadIntoPlayer(String),
    SetBufferLength(f32),
    Play(i32),
    Pause,
    Stop,
    SetVolume(f32, f32),
    FreePlayer,
}

thread_local! {
    static CALLS: RefCell<Vec<StubCall>> = const { RefCell::new(Vec::new()) };
}

fn record(call: StubCall) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

/// Drain the calls recorded on this thread.
pub fn take_calls() -> Vec<StubCall> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

fn c_string(ptr: *const c_char) -> String {
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

// ============================================================================
// playdate_sys
// ============================================================================

// Fixed-arity stand-ins for the variadic sinks; only ever called with the
// trampoline's single "%s" argument.
unsafe extern "C" fn stub_log(fmt: *const c_char, msg: *const c_char) {
    record(StubCall::Log {
        fmt: c_string(fmt),
        msg: c_string(msg),
    });
}

unsafe extern "C" fn stub_error(fmt: *const c_char, msg: *const c_char) {
    record(StubCall::Error {
        fmt: c_string(fmt),
        msg: c_string(msg),
    });
}

fn as_log_fn(f: unsafe extern "C" fn(*const c_char, *const c_char)) -> LogFn {
    unsafe { std::mem::transmute::<unsafe extern "C" fn(*const c_char, *const c_char), LogFn>(f) }
}

unsafe extern "C" fn stub_current_time() -> c_uint {
    1234
}

unsafe extern "C" fn stub_set_update_callback(
    _update: Option<UpdateCallback>,
    _userdata: *mut c_void,
) {
    record(StubCall::SetUpdateCallback);
}

unsafe extern "C" fn stub_button_state(
    current: *mut Buttons,
    pushed: *mut Buttons,
    released: *mut Buttons,
) {
    unsafe {
        if let Some(current) = current.as_mut() {
            *current = Buttons::A | Buttons::UP;
        }
        if let Some(pushed) = pushed.as_mut() {
            *pushed = Buttons::A;
        }
        if let Some(released) = released.as_mut() {
            *released = Buttons::B;
        }
    }
}

unsafe extern "C" fn stub_set_peripherals(mask: Peripherals) {
    record(StubCall::SetPeripherals(mask.bits()));
}

unsafe extern "C" fn stub_crank_change() -> c_float {
    2.5
}

unsafe extern "C" fn stub_crank_angle() -> c_float {
    90.0
}

unsafe extern "C" fn stub_crank_docked() -> c_int {
    0
}

// ============================================================================
// playdate_display
// ============================================================================

unsafe extern "C" fn stub_width() -> c_int {
    400
}

unsafe extern "C" fn stub_height() -> c_int {
    240
}

unsafe extern "C" fn stub_set_refresh_rate(rate: c_float) {
    record(StubCall::SetRefreshRate(rate));
}

// ============================================================================
// playdate_sound_fileplayer
// ============================================================================

const STUB_SOUND: &str = "sounds/explosion";

unsafe extern "C" fn stub_new_player() -> *mut FilePlayer {
    // Never dereferenced by the stubs.
    ptr::NonNull::<FilePlayer>::dangling().as_ptr()
}

unsafe extern "C" fn stub_free_player(_player: *mut FilePlayer) {
    record(StubCall::FreePlayer);
}

unsafe extern "C" fn stub_load_into_player(_player: *mut FilePlayer, path: *const c_char) -> c_int {
    let path = c_string(path);
    let found = path == STUB_SOUND;
    record(StubCall::LoadIntoPlayer(path));
    found as c_int
}

unsafe extern "C" fn stub_set_buffer_length(_player: *mut FilePlayer, len: c_float) {
    record(StubCall::SetBufferLength(len));
}

unsafe extern "C" fn stub_play(_player: *mut FilePlayer, repeat: c_int) -> c_int {
    record(StubCall::Play(repeat));
    1
}

unsafe extern "C" fn stub_is_playing(_player: *mut FilePlayer) -> c_int {
    1
}

unsafe extern "C" fn stub_pause(_player: *mut FilePlayer) {
    record(StubCall::Pause);
}

unsafe extern "C" fn stub_stop(_player: *mut FilePlayer) {
    record(StubCall::Stop);
}

unsafe extern "C" fn stub_set_volume(_player: *mut FilePlayer, left: c_float, right: c_float) {
    record(StubCall::SetVolume(left, right));
}

// ============================================================================
// Table assembly
// ============================================================================

struct StubRuntime {
    api: PlaydateApi,
    _system: Box<PlaydateSys>,
    _display: Box<PlaydateDisplay>,
    _sound: Box<PlaydateSound>,
    _fileplayer: Box<PlaydateSoundFileplayer>,
}

// SAFETY: the stub tables are never mutated after construction.
unsafe impl Send for StubRuntime {}
unsafe impl Sync for StubRuntime {}

fn build_stub_runtime() -> StubRuntime {
    let system = Box::new(PlaydateSys {
        realloc: None,
        format_string: None,
        log_to_console: Some(as_log_fn(stub_log)),
        error: Some(as_log_fn(stub_error)),
        get_language: None,
        get_current_time_milliseconds: Some(stub_current_time),
        get_seconds_since_epoch: None,
        draw_fps: None,
        set_update_callback: Some(stub_set_update_callback),
        get_button_state: Some(stub_button_state),
        set_peripherals_enabled: Some(stub_set_peripherals),
        get_accelerometer: None,
        get_crank_change: Some(stub_crank_change),
        get_crank_angle: Some(stub_crank_angle),
        is_crank_docked: Some(stub_crank_docked),
    });
    let display = Box::new(PlaydateDisplay {
        get_width: Some(stub_width),
        get_height: Some(stub_height),
        set_refresh_rate: Some(stub_set_refresh_rate),
    });
    let fileplayer = Box::new(PlaydateSoundFileplayer {
        new_player: Some(stub_new_player),
        free_player: Some(stub_free_player),
        load_into_player: Some(stub_load_into_player),
        set_buffer_length: Some(stub_set_buffer_length),
        play: Some(stub_play),
        is_playing: Some(stub_is_playing),
        pause: Some(stub_pause),
        stop: Some(stub_stop),
        set_volume: Some(stub_set_volume),
    });
    let sound = Box::new(PlaydateSound {
        channel: ptr::null(),
        fileplayer: &*fileplayer,
    });

    StubRuntime {
        api: PlaydateApi {
            system: &*system,
            file: ptr::null(),
            graphics: ptr::null(),
            sprite: ptr::null(),
            display: &*display,
            sound: &*sound,
            lua: ptr::null(),
            json: ptr::null(),
            scoreboards: ptr::null(),
        },
        _system: system,
        _display: display,
        _sound: sound,
        _fileplayer: fileplayer,
    }
}

/// Pointer to the process-wide stub table.
pub fn stub_api_ptr() -> *mut PlaydateApi {
    static STUB: OnceLock<StubRuntime> = OnceLock::new();
    let runtime = STUB.get_or_init(build_stub_runtime);
    &runtime.api as *const PlaydateApi as *mut PlaydateApi
}

/// Populate the runtime handle with the stub table and clear this thread's calls.
pub fn install_stub_api() {
    set_api(stub_api_ptr());
    take_calls();
}
