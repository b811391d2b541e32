//! Audio stub.
//!
//! Mirrors the app's audio layer, which simulates default-song playback
//! (it only logs) and tracks a current track for custom songs. No audio
//! backend sits behind this; playback state exists so the timer flow can
//! start/stop music at the right moments.

use crate::shell::MusicMode;

/// What is nominally playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Track {
    /// Built-in song sized to the task duration.
    Default { duration_min: u64 },
    /// User-picked file.
    Custom { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Playback {
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug)]
pub struct AudioManager {
    track: Option<Track>,
    playback: Playback,
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            track: None,
            playback: Playback::Stopped,
        }
    }

    /// Start the music a session asked for. `CustomTime` plays the default
    /// song as well; only `CustomSong` needs a file.
    pub fn play_for(&mut self, mode: MusicMode, duration_min: u64, custom_song: Option<&str>) {
        match (mode, custom_song) {
            (MusicMode::CustomSong, Some(path)) => self.play_custom(path),
            (MusicMode::CustomSong, None) => {
                log::warn!("custom-song mode with no song configured; falling back to default");
                self.play_default(duration_min);
            }
            _ => self.play_default(duration_min),
        }
    }

    pub fn play_default(&mut self, duration_min: u64) {
        // Simulated playback, matching the app's stub.
        log::info!("playing default song for {duration_min} minutes");
        self.track = Some(Track::Default { duration_min });
        self.playback = Playback::Playing;
    }

    pub fn play_custom(&mut self, path: &str) {
        log::info!("playing custom song: {path}");
        self.track = Some(Track::Custom { path: path.to_string() });
        self.playback = Playback::Playing;
    }

    pub fn pause(&mut self) {
        if self.playback == Playback::Playing {
            self.playback = Playback::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.playback == Playback::Paused {
            self.playback = Playback::Playing;
        }
    }

    pub fn stop(&mut self) {
        self.track = None;
        self.playback = Playback::Stopped;
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}
