use super::*;
use crate::library::Track;
use std::time::Duration;

fn t(title: &str) -> Track {
    Track {
        path: std::path::PathBuf::new(),
        title: title.into(),
        artist: String::new(),
        display: title.into(),
    }
}

fn app3() -> App {
    App::new(vec![t("A"), t("B"), t("C")])
}

#[test]
fn new_app_starts_paused_on_first_track() {
    let app = app3();
    assert_eq!(app.current, 0);
    assert!(!app.playing);
    assert_eq!(app.elapsed, Duration::ZERO);
    assert_eq!(app.duration, None);
    assert_eq!(app.state(), PlaybackState::Paused);
}

#[test]
fn next_returns_to_start_after_playlist_length_steps() {
    for start in 0..3 {
        let mut app = app3();
        app.current = start;
        for _ in 0..3 {
            app.next_track();
        }
        assert_eq!(app.current, start);
    }
}

#[test]
fn next_and_prev_wrap_at_playlist_boundaries() {
    let mut app = app3();
    app.prev_track();
    assert_eq!(app.current, 2);

    app.current = 2;
    app.next_track();
    assert_eq!(app.current, 0);
}

#[test]
fn track_change_resets_progress_and_forces_playing() {
    let mut app = app3();
    app.playing = false;
    app.elapsed = Duration::from_secs(42);
    app.duration = Some(Duration::from_secs(180));

    app.next_track();
    assert_eq!(app.elapsed, Duration::ZERO);
    assert_eq!(app.duration, None);
    assert!(app.playing);

    app.playing = false;
    app.elapsed = Duration::from_secs(7);
    app.prev_track();
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(app.playing);

    app.playing = false;
    app.on_track_ended();
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(app.playing);
}

#[test]
fn toggle_twice_returns_to_the_original_state() {
    let mut app = app3();
    app.elapsed = Duration::from_secs(30);
    app.duration = Some(Duration::from_secs(100));

    app.toggle_play_pause();
    assert!(app.playing);
    app.toggle_play_pause();
    assert!(!app.playing);
    assert_eq!(app.current, 0);
    assert_eq!(app.elapsed, Duration::from_secs(30));
}

#[test]
fn transport_is_inert_without_tracks() {
    let mut app = App::new(Vec::new());
    assert_eq!(app.state(), PlaybackState::Idle);
    assert!(app.current_track().is_none());

    app.toggle_play_pause();
    assert!(!app.playing);
    app.next_track();
    app.prev_track();
    assert_eq!(app.current, 0);
    assert!(!app.seek_to(Duration::ZERO));
    assert_eq!(app.state(), PlaybackState::Idle);
}

#[test]
fn seek_within_known_duration_is_exact() {
    let mut app = app3();
    app.duration = Some(Duration::from_secs(180));

    assert!(app.seek_to(Duration::from_secs(90)));
    assert_eq!(app.elapsed, Duration::from_secs(90));

    // Seeking to either boundary is allowed.
    assert!(app.seek_to(Duration::ZERO));
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(app.seek_to(Duration::from_secs(180)));
    assert_eq!(app.elapsed, Duration::from_secs(180));
}

#[test]
fn seek_past_duration_is_rejected() {
    let mut app = app3();
    app.duration = Some(Duration::from_secs(180));
    app.elapsed = Duration::from_secs(42);

    assert!(!app.seek_to(Duration::from_secs(200)));
    assert_eq!(app.elapsed, Duration::from_secs(42));

    assert!(app.seek_to(Duration::from_secs(90)));
    assert_eq!(app.elapsed, Duration::from_secs(90));
}

#[test]
fn seek_with_unknown_duration_accepts_only_zero() {
    let mut app = app3();
    app.elapsed = Duration::from_secs(3);

    assert!(!app.seek_to(Duration::from_secs(10)));
    assert_eq!(app.elapsed, Duration::from_secs(3));

    assert!(app.seek_to(Duration::ZERO));
    assert_eq!(app.elapsed, Duration::ZERO);
}

#[test]
fn progress_reports_clamp_to_a_known_duration() {
    let mut app = app3();
    app.on_progress(Duration::from_secs(10));
    assert_eq!(app.elapsed, Duration::from_secs(10));

    app.on_duration(Duration::from_secs(8));
    assert_eq!(app.duration, Some(Duration::from_secs(8)));
    // A stale overshoot resolves as soon as the duration lands.
    assert_eq!(app.elapsed, Duration::from_secs(8));

    app.on_progress(Duration::from_secs(9));
    assert_eq!(app.elapsed, Duration::from_secs(8));
}

#[test]
fn play_next_and_track_end_walk_the_playlist_and_wrap() {
    let mut app = app3();
    assert_eq!(app.state(), PlaybackState::Paused);

    app.toggle_play_pause();
    assert_eq!(app.state(), PlaybackState::Playing);
    assert_eq!(app.current, 0);

    app.next_track();
    assert_eq!(app.current, 1);
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(app.playing);

    app.on_track_ended();
    assert_eq!(app.current, 2);
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(app.playing);

    app.on_track_ended();
    assert_eq!(app.current, 0);
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(app.playing);
}
