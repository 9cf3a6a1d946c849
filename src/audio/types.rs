//! Audio-related small types.
//!
//! Commands sent into the playback thread and the events it reports back.

use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Load the track at the given playlist index, optionally starting
    /// playback immediately.
    Load { index: usize, start_playing: bool },
    /// Pause the current sink.
    Pause,
    /// Resume the current sink.
    Resume,
    /// Reposition playback within the current track.
    SeekTo(Duration),
    /// Quit the playback thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone)]
pub enum AudioEvent {
    /// Periodic elapsed-time report for the current track.
    Progress(Duration),
    /// Total duration of the current track, once known.
    DurationKnown(Duration),
    /// The current track played to completion.
    Ended,
    /// The current track could not be opened or decoded.
    TrackFailed(String),
}
