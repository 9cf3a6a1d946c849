//! Playback controller types: `App` and `PlaybackState`.
//!
//! `App` is the single owner of transport state. Every transition goes
//! through the methods here; the runtime issues the matching audio command
//! after a transition, so this module stays free of I/O and can be tested
//! on its own.

use std::time::Duration;

use crate::library::Track;

/// The playback state of the application, derived from the play flag and
/// whether a playlist is loaded at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// No playlist (or an empty one); transport controls are inert.
    Idle,
    Paused,
    Playing,
}

/// The main application model: the playlist plus transport state.
pub struct App {
    pub tracks: Vec<Track>,
    /// Index of the current track. Stays within bounds while tracks exist.
    pub current: usize,
    pub playing: bool,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Total duration of the current track once the playback thread has
    /// reported it; `None` until then.
    pub duration: Option<Duration>,
}

impl App {
    /// Create a new `App` with the provided list of `tracks`.
    ///
    /// A freshly loaded playlist starts paused on the first track with no
    /// progress and an unknown duration.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: 0,
            playing: false,
            elapsed: Duration::ZERO,
            duration: None,
        }
    }

    /// Return true if the playlist contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// The current track, if the playlist is non-empty.
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Derived transport state.
    pub fn state(&self) -> PlaybackState {
        if !self.has_tracks() {
            PlaybackState::Idle
        } else if self.playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    /// Flip between playing and paused. No-op while the playlist is empty.
    pub fn toggle_play_pause(&mut self) {
        if !self.has_tracks() {
            return;
        }
        self.playing = !self.playing;
    }

    /// Advance to the next track, wrapping at the end of the playlist.
    pub fn next_track(&mut self) {
        if !self.has_tracks() {
            return;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.reset_track_progress();
    }

    /// Step back to the previous track, wrapping at the start of the playlist.
    pub fn prev_track(&mut self) {
        if !self.has_tracks() {
            return;
        }
        let len = self.tracks.len();
        self.current = (self.current + len - 1) % len;
        self.reset_track_progress();
    }

    /// Request a reposition to `target`.
    ///
    /// Returns true when the seek is accepted. Targets past the known
    /// duration are rejected and leave `elapsed` untouched; while the
    /// duration is still unknown only a seek to zero is accepted.
    pub fn seek_to(&mut self, target: Duration) -> bool {
        if !self.has_tracks() {
            return false;
        }
        match self.duration {
            Some(d) if target <= d => {
                self.elapsed = target;
                true
            }
            None if target == Duration::ZERO => {
                self.elapsed = target;
                true
            }
            _ => false,
        }
    }

    /// Progress callback from the playback thread.
    ///
    /// The reported value is trusted, but clamped so `elapsed` never
    /// overshoots a known duration.
    pub fn on_progress(&mut self, elapsed: Duration) {
        self.elapsed = match self.duration {
            Some(d) => elapsed.min(d),
            None => elapsed,
        };
    }

    /// Duration callback from the playback thread.
    pub fn on_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
        if self.elapsed > duration {
            self.elapsed = duration;
        }
    }

    /// End-of-track callback. The playlist loops, so this is `next_track`.
    pub fn on_track_ended(&mut self) {
        self.next_track();
    }

    // Switching tracks starts the new one from zero and drops the stale
    // duration until the playback thread reports the new one. Browsing the
    // playlist never silently pauses.
    fn reset_track_progress(&mut self) {
        self.elapsed = Duration::ZERO;
        self.duration = None;
        self.playing = true;
    }
}
