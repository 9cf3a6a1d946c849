use std::fs;

use tempfile::tempdir;

use super::probe::probe_duration;

#[test]
fn probe_duration_returns_none_for_non_audio_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("not-audio.mp3");
    fs::write(&path, b"definitely not an mp3").unwrap();

    assert!(probe_duration(&path).is_none());
}

#[test]
fn probe_duration_returns_none_for_a_missing_file() {
    let dir = tempdir().unwrap();

    assert!(probe_duration(&dir.path().join("absent.ogg")).is_none());
}
