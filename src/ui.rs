//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use crate::app::{App, PlaybackState};
use crate::config::{ControlsSettings, TimeField, TrackDisplayField, UiSettings};

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("space/p".to_string(), "play/pause".to_string());
    map.insert("h/l".to_string(), "prev/next track".to_string());
    // H/L is filled dynamically from config.
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_step_seconds: u64) -> String {
    let order = ["space/p", "h/l", "H/L", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] seek -/+{}s", seek_step_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `m:ss`, seconds zero-padded to two digits.
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Build the "now playing" track text according to `ui` settings.
fn now_playing_track_text(app: &App, ui: &UiSettings) -> String {
    let Some(track) = app.current_track() else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for f in &ui.now_playing_track_fields {
        match f {
            TrackDisplayField::Display => {
                if !track.display.trim().is_empty() {
                    parts.push(track.display.clone());
                }
            }
            TrackDisplayField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.clone());
                }
            }
            TrackDisplayField::Artist => {
                let a = track.artist.trim();
                if !a.is_empty() {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Filename => {
                if let Some(stem) = track.path.file_stem().and_then(|s| s.to_str()) {
                    if !stem.trim().is_empty() {
                        parts.push(stem.to_string());
                    }
                }
            }
        }
    }

    if parts.is_empty() {
        track.display.clone()
    } else {
        parts.join(&ui.now_playing_track_separator)
    }
}

/// Build the progress time text (elapsed/total/remaining) per `UiSettings`.
///
/// Total and remaining are skipped while the duration is unknown.
fn time_text(elapsed: Duration, total: Option<Duration>, ui: &UiSettings) -> Option<String> {
    if ui.now_playing_time_fields.is_empty() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    for f in &ui.now_playing_time_fields {
        match f {
            TimeField::Elapsed => parts.push(format_time(elapsed)),
            TimeField::Total => {
                if let Some(t) = total {
                    parts.push(format_time(t));
                }
            }
            TimeField::Remaining => {
                if let Some(t) = total {
                    let rem = t.saturating_sub(elapsed);
                    parts.push(format!("-{}", format_time(rem)));
                }
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&ui.now_playing_time_separator))
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
    last_error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" segue ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now-playing box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        match app.state() {
            PlaybackState::Idle => {
                parts.push("No playlist loaded — nothing to play".to_string());
            }
            PlaybackState::Playing | PlaybackState::Paused => {
                let state = if app.playing { "Playing" } else { "Paused" };
                parts.push(state.to_string());
                parts.push(format!("Song: {}", now_playing_track_text(app, ui_settings)));
                parts.push(format!(
                    "Track {}/{}",
                    app.current + 1,
                    app.tracks.len()
                ));
            }
        }

        if let Some(err) = last_error {
            parts.push(format!("ERR: {}", err));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Progress gauge (the seek slider of the widget)
    {
        let (ratio, label) = match app.duration {
            Some(d) if d > Duration::ZERO => {
                let ratio = (app.elapsed.as_secs_f64() / d.as_secs_f64()).clamp(0.0, 1.0);
                let label = time_text(app.elapsed, Some(d), ui_settings)
                    .unwrap_or_else(|| format_time(app.elapsed));
                (ratio, label)
            }
            _ => {
                let label = time_text(app.elapsed, None, ui_settings)
                    .unwrap_or_else(|| format_time(app.elapsed));
                (0.0, label)
            }
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" progress "))
            .ratio(ratio)
            .label(label)
            .use_unicode(true);
        frame.render_widget(gauge, chunks[2]);
    }

    // Playlist, current track highlighted
    {
        let items: Vec<ListItem> = app
            .tracks
            .iter()
            .map(|t| ListItem::new(t.display.as_str()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if app.has_tracks() {
            state.select(Some(app.current));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    let footer = Paragraph::new(controls_text(controls_settings.seek_step_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds_but_not_minutes() {
        assert_eq!(format_time(Duration::from_secs(65)), "1:05");
        assert_eq!(format_time(Duration::from_secs(5)), "0:05");
        assert_eq!(format_time(Duration::from_secs(0)), "0:00");
        assert_eq!(format_time(Duration::from_secs(600)), "10:00");
        assert_eq!(format_time(Duration::from_secs(3600)), "60:00");
    }

    #[test]
    fn time_text_joins_elapsed_total_remaining() {
        let ui = UiSettings::default();
        let s = time_text(
            Duration::from_secs(65),
            Some(Duration::from_secs(180)),
            &ui,
        )
        .unwrap();
        assert_eq!(s, "1:05 / 3:00 / -1:55");
    }

    #[test]
    fn time_text_skips_total_and_remaining_while_duration_is_unknown() {
        let ui = UiSettings::default();
        let s = time_text(Duration::from_secs(7), None, &ui).unwrap();
        assert_eq!(s, "0:07");
    }

    #[test]
    fn time_text_is_none_when_no_fields_are_configured() {
        let ui = UiSettings {
            now_playing_time_fields: Vec::new(),
            ..UiSettings::default()
        };
        assert!(time_text(Duration::ZERO, None, &ui).is_none());
    }
}
