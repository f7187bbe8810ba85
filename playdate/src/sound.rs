//! Streaming audio via the runtime's file player

use std::ffi::CString;
use std::ptr::NonNull;

use erythrina_sys::{FilePlayer as RawFilePlayer, PlaydateSoundFileplayer};

use crate::error::{PlaydateError, Result, required};

fn fileplayer_table() -> Result<&'static PlaydateSoundFileplayer> {
    let api = erythrina_sys::api().ok_or(PlaydateError::ApiNotInitialized)?;
    // SAFETY: host tables live for the whole process.
    let sound = unsafe { api.sound.as_ref() }.ok_or(PlaydateError::MissingFunction("sound"))?;
    unsafe { sound.fileplayer.as_ref() }.ok_or(PlaydateError::MissingFunction("fileplayer"))
}

/// A host file player, freed on drop.
pub struct FilePlayer {
    raw: NonNull<RawFilePlayer>,
    table: &'static PlaydateSoundFileplayer,
}

impl FilePlayer {
    pub fn new() -> Result<Self> {
        let table = fileplayer_table()?;
        let new_player = required(table.new_player, "newPlayer")?;
        let raw = NonNull::new(unsafe { new_player() }).ok_or(PlaydateError::PlayerAlloc)?;
        Ok(Self { raw, table })
    }

    /// Load an audio file from the game bundle, e.g. `"sounds/explosion"`.
    pub fn load(&mut self, path: &str) -> Result<()> {
        let load = required(self.table.load_into_player, "loadIntoPlayer")?;
        let c_path = CString::new(path)?;
        match unsafe { load(self.raw.as_ptr(), c_path.as_ptr()) } {
            0 => Err(PlaydateError::LoadFailed(path.to_string())),
            _ => Ok(()),
        }
    }

    /// Start playback. `repeat` of 0 loops forever, otherwise plays that many times.
    pub fn play(&self, repeat: i32) -> Result<()> {
        let play = required(self.table.play, "play")?;
        match unsafe { play(self.raw.as_ptr(), repeat) } {
            0 => Err(PlaydateError::PlayFailed),
            _ => Ok(()),
        }
    }

    pub fn is_playing(&self) -> Result<bool> {
        let is_playing = required(self.table.is_playing, "isPlaying")?;
        Ok(unsafe { is_playing(self.raw.as_ptr()) } != 0)
    }

    pub fn pause(&self) -> Result<()> {
        let pause = required(self.table.pause, "pause")?;
        unsafe { pause(self.raw.as_ptr()) };
        Ok(())
    }

    pub fn stop(&self) -> Result<()> {
        let stop = required(self.table.stop, "stop")?;
        unsafe { stop(self.raw.as_ptr()) };
        Ok(())
    }

    pub fn set_volume(&self, left: f32, right: f32) -> Result<()> {
        let set_volume = required(self.table.set_volume, "setVolume")?;
        unsafe { set_volume(self.raw.as_ptr(), left, right) };
        Ok(())
    }

    /// Seconds of audio to buffer ahead of playback.
    pub fn set_buffer_length(&self, seconds: f32) -> Result<()> {
        let set = required(self.table.set_buffer_length, "setBufferLength")?;
        unsafe { set(self.raw.as_ptr(), seconds) };
        Ok(())
    }

    pub fn as_raw(&self) -> *mut RawFilePlayer {
        self.raw.as_ptr()
    }
}

impl Drop for FilePlayer {
    fn drop(&mut self) {
        if let Some(free_player) = self.table.free_player {
            unsafe { free_player(self.raw.as_ptr()) };
        }
    }
}
