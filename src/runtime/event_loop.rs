use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioCmd, AudioEvent, AudioPlayer};
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Most recent load/decode failure reported by the playback thread.
    pub last_error: Option<String>,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self { last_error: None }
    }
}

/// Main terminal event loop: drains playback events into the controller,
/// draws the UI and translates key presses into transport intents.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::new();

    loop {
        // Drain playback events first so the frame below renders fresh state.
        while let Some(ev) = audio_player.try_recv_event() {
            handle_audio_event(ev, app, audio_player, &mut state);
        }

        terminal.draw(|f| {
            ui::draw(
                f,
                app,
                &settings.ui,
                &settings.controls,
                state.last_error.as_deref(),
            )
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, audio_player, &mut state)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn handle_audio_event(
    ev: AudioEvent,
    app: &mut App,
    audio_player: &AudioPlayer,
    state: &mut EventLoopState,
) {
    match ev {
        AudioEvent::Progress(t) => app.on_progress(t),
        AudioEvent::DurationKnown(d) => app.on_duration(d),
        AudioEvent::Ended => {
            // End-of-track is policy-equivalent to pressing next.
            app.on_track_ended();
            if app.has_tracks() {
                let _ = audio_player.send(AudioCmd::Load {
                    index: app.current,
                    start_playing: true,
                });
            }
        }
        AudioEvent::TrackFailed(msg) => {
            // Leave the controller alone; surface the failure in the status line.
            state.last_error = Some(msg);
        }
    }
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    state: &mut EventLoopState,
) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Char('q') => {
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            if app.has_tracks() {
                app.toggle_play_pause();
                let cmd = if app.playing {
                    AudioCmd::Resume
                } else {
                    AudioCmd::Pause
                };
                let _ = audio_player.send(cmd);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.has_tracks() {
                state.last_error = None;
                app.next_track();
                let _ = audio_player.send(AudioCmd::Load {
                    index: app.current,
                    start_playing: true,
                });
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if app.has_tracks() {
                state.last_error = None;
                app.prev_track();
                let _ = audio_player.send(AudioCmd::Load {
                    index: app.current,
                    start_playing: true,
                });
            }
        }
        KeyCode::Char('L') => {
            seek_by(app, audio_player, settings.controls.seek_step_seconds as i64);
        }
        KeyCode::Char('H') => {
            seek_by(
                app,
                audio_player,
                -(settings.controls.seek_step_seconds as i64),
            );
        }
        _ => {}
    }

    Ok(false)
}

/// Compute an absolute seek target from the current position and submit it.
///
/// The target is clamped into the valid range before the controller sees
/// it, so a step past either end lands on the boundary instead of being
/// rejected. Seeking is unavailable until the duration is known.
fn seek_by(app: &mut App, audio_player: &AudioPlayer, step_secs: i64) {
    let Some(duration) = app.duration else {
        return;
    };

    let cur = app.elapsed.as_secs() as i64;
    let target = (cur + step_secs).clamp(0, duration.as_secs() as i64);
    let target = Duration::from_secs(target as u64);

    if app.seek_to(target) {
        let _ = audio_player.send(AudioCmd::SeekTo(target));
    }
}
