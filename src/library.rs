//! Playlist loading and the track model.
//!
//! Tracks come from a static TOML manifest read once at startup; the
//! playlist is fixed for the lifetime of the session.

mod load;
mod model;

pub use load::load_manifest;
pub use model::Track;

#[cfg(test)]
mod tests;
