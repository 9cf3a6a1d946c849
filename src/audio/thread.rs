use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStreamBuilder, Sink};

use crate::library::Track;

use super::probe::probe_duration;
use super::sink::create_sink_at;
use super::types::{AudioCmd, AudioEvent};

pub(super) fn spawn_audio_thread(
    tracks: Vec<Track>,
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut index: Option<usize> = None;
        let mut paused = true;
        let mut sink: Option<Sink> = None;

        // Elapsed bookkeeping: accumulated time across pauses plus the
        // wall-clock start of the current playing stretch.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        // Set once the drained sink has been reported; cleared on load/seek.
        let mut ended_sent = false;

        fn current_elapsed(accumulated: Duration, started_at: Option<Instant>) -> Duration {
            accumulated + started_at.map_or(Duration::ZERO, |st| st.elapsed())
        }

        fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
            if fade_out_ms == 0 {
                sink.set_volume(0.0);
                return;
            }
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            sink.set_volume(1.0);
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(1.0 - t);
                thread::sleep(Duration::from_millis(step_ms));
            }
            sink.set_volume(0.0);
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load {
                        index: i,
                        start_playing,
                    } => {
                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }
                        sink = None;
                        index = None;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        ended_sent = false;

                        let Some(track) = tracks.get(i) else {
                            continue;
                        };

                        match create_sink_at(&stream, track, Duration::ZERO) {
                            Ok(new_sink) => {
                                if start_playing {
                                    new_sink.play();
                                    started_at = Some(Instant::now());
                                    paused = false;
                                } else {
                                    paused = true;
                                }
                                sink = Some(new_sink);
                                index = Some(i);

                                if let Some(d) = probe_duration(&track.path) {
                                    let _ = events.send(AudioEvent::DurationKnown(d));
                                }
                            }
                            Err(msg) => {
                                paused = true;
                                let _ = events.send(AudioEvent::TrackFailed(msg));
                            }
                        }
                    }

                    AudioCmd::Pause => {
                        if let Some(ref s) = sink {
                            if !paused {
                                s.pause();
                                if let Some(st) = started_at {
                                    accumulated += Instant::now() - st;
                                }
                                started_at = None;
                                paused = true;
                            }
                        }
                    }

                    AudioCmd::Resume => {
                        if let Some(ref s) = sink {
                            if paused {
                                s.play();
                                started_at = Some(Instant::now());
                                paused = false;
                            }
                        }
                    }

                    AudioCmd::SeekTo(target) => {
                        // Repositioning rebuilds the current sink and skips
                        // into the file; works for the common formats.
                        let Some(i) = index else {
                            continue;
                        };
                        if sink.is_none() {
                            continue;
                        }

                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }

                        let track = &tracks[i];
                        match create_sink_at(&stream, track, target) {
                            Ok(new_sink) => {
                                if paused {
                                    started_at = None;
                                } else {
                                    new_sink.play();
                                    started_at = Some(Instant::now());
                                }
                                sink = Some(new_sink);
                                accumulated = target;
                                ended_sent = false;
                                let _ = events.send(AudioEvent::Progress(target));
                            }
                            Err(msg) => {
                                sink = None;
                                index = None;
                                started_at = None;
                                paused = true;
                                let _ = events.send(AudioEvent::TrackFailed(msg));
                            }
                        }
                    }

                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = sink {
                            // Fade out gently before stopping.
                            fade_out_sink(s, fade_out_ms);
                            s.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic reporting: progress while playing, a single
                    // end-of-track event once the sink drains. What happens
                    // after a track ends is the controller's decision.
                    let Some(ref s) = sink else {
                        continue;
                    };
                    if paused {
                        continue;
                    }

                    if s.empty() {
                        if !ended_sent {
                            ended_sent = true;
                            let _ = events.send(AudioEvent::Ended);
                        }
                    } else {
                        let _ = events.send(AudioEvent::Progress(current_elapsed(
                            accumulated,
                            started_at,
                        )));
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
