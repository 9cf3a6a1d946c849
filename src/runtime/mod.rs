use std::env;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioCmd, AudioPlayer};
use crate::library;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let manifest_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "playlist.toml".to_string());

    let tracks = match library::load_manifest(Path::new(&manifest_path)) {
        Ok(tracks) => tracks,
        Err(e) => {
            // A missing or broken manifest is not fatal: start with an empty
            // playlist and let the UI show the placeholder state.
            eprintln!("segue: failed to load playlist {manifest_path}: {e}");
            Vec::new()
        }
    };

    let audio_player = AudioPlayer::new(tracks.clone());
    let mut app = App::new(tracks);

    // Preload the first track so duration and seeking work before the first
    // play; autoplay starts it immediately.
    if app.has_tracks() {
        if settings.playback.autoplay {
            app.playing = true;
        }
        let _ = audio_player.send(AudioCmd::Load {
            index: app.current,
            start_playing: app.playing,
        });
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio_player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
