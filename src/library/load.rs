use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::model::{Track, make_display};

/// On-disk playlist manifest.
///
/// ```toml
/// [[tracks]]
/// title = "A True Story"
/// artist = "Someone"
/// file = "songs/a-true-story.mp3"
/// ```
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, alias = "track")]
    tracks: Vec<ManifestTrack>,
}

#[derive(Debug, Deserialize)]
struct ManifestTrack {
    title: String,
    #[serde(default)]
    artist: String,
    file: PathBuf,
}

/// Load the playlist manifest at `path`.
///
/// The playlist keeps the manifest order. Relative `file` entries resolve
/// against the manifest's directory, so a playlist can ship next to its
/// audio files and be moved around as one unit. An empty `tracks` list
/// yields an empty playlist; the caller decides what to do with it.
pub fn load_manifest(path: &Path) -> Result<Vec<Track>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&raw)?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let tracks = manifest
        .tracks
        .into_iter()
        .map(|entry| {
            let resolved = if entry.file.is_absolute() {
                entry.file
            } else {
                base.join(entry.file)
            };
            let display = make_display(&entry.title, &entry.artist);
            Track {
                path: resolved,
                title: entry.title,
                artist: entry.artist,
                display,
            }
        })
        .collect();

    Ok(tracks)
}
