use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use super::load::load_manifest;
use super::model::make_display;

#[test]
fn make_display_prefers_artist_dash_title() {
    assert_eq!(make_display("Song", "Artist"), "Artist - Song");
    assert_eq!(make_display("Song", "  Artist  "), "Artist - Song");
    assert_eq!(make_display("Song", ""), "Song");
    assert_eq!(make_display("Song", "   "), "Song");
}

#[test]
fn load_manifest_keeps_order_and_resolves_relative_paths() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("playlist.toml");
    fs::write(
        &manifest,
        r#"
[[tracks]]
title = "First"
artist = "Someone"
file = "songs/first.mp3"

[[tracks]]
title = "Second"
file = "second.ogg"
"#,
    )
    .unwrap();

    let tracks = load_manifest(&manifest).unwrap();
    assert_eq!(tracks.len(), 2);

    assert_eq!(tracks[0].title, "First");
    assert_eq!(tracks[0].artist, "Someone");
    assert_eq!(tracks[0].display, "Someone - First");
    assert_eq!(tracks[0].path, dir.path().join("songs/first.mp3"));

    assert_eq!(tracks[1].title, "Second");
    assert_eq!(tracks[1].artist, "");
    assert_eq!(tracks[1].display, "Second");
    assert_eq!(tracks[1].path, dir.path().join("second.ogg"));
}

#[test]
fn load_manifest_keeps_absolute_paths() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("playlist.toml");
    fs::write(
        &manifest,
        r#"
[[tracks]]
title = "Elsewhere"
file = "/srv/music/elsewhere.flac"
"#,
    )
    .unwrap();

    let tracks = load_manifest(&manifest).unwrap();
    assert_eq!(tracks[0].path, PathBuf::from("/srv/music/elsewhere.flac"));
}

#[test]
fn load_manifest_accepts_the_singular_track_alias() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("playlist.toml");
    fs::write(
        &manifest,
        r#"
[[track]]
title = "Only"
file = "only.mp3"
"#,
    )
    .unwrap();

    let tracks = load_manifest(&manifest).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Only");
}

#[test]
fn load_manifest_with_no_tracks_yields_an_empty_playlist() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("playlist.toml");
    fs::write(&manifest, "").unwrap();

    let tracks = load_manifest(&manifest).unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn load_manifest_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("playlist.toml");
    fs::write(&manifest, "[[tracks]\ntitle = ").unwrap();

    assert!(load_manifest(&manifest).is_err());
}

#[test]
fn load_manifest_errors_on_a_missing_file() {
    let dir = tempdir().unwrap();

    assert!(load_manifest(&dir.path().join("absent.toml")).is_err());
}
