//! Application module: exposes the playback controller used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and owns the playlist together with
//! the transport state (current track, play flag, elapsed time, duration).

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
