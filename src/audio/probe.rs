//! Track duration probing.
//!
//! Durations come from `lofty`'s file properties when the container can be
//! parsed; otherwise the decoder itself is asked. Either source may fail
//! for odd files, in which case the duration simply stays unknown.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, Source};

/// Probe the total duration of the audio file at `path`.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    if let Ok(tagged) = lofty::read_from_path(path) {
        let d = tagged.properties().duration();
        if d > Duration::ZERO {
            return Some(d);
        }
    }

    let file = File::open(path).ok()?;
    let source = Decoder::new(BufReader::new(file)).ok()?;
    source.total_duration()
}
