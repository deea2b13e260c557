//! Session state types.

use crate::error::PlayerError;
use serde::{Deserialize, Serialize};
use tunelet_core::Track;

/// Playback session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// No active track
    Idle,

    /// A track is selected and its preview URL is being resolved
    Resolving,

    /// The resolved preview is playing
    Playing,

    /// Playback is suspended, position retained
    Paused,
}

/// Point-in-time view of the playback session for UI rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    /// Session state
    pub state: PlayerState,

    /// The currently selected track, if any
    pub active_track: Option<Track>,

    /// The resolved preview URL, once resolution has completed
    pub resolved_source: Option<String>,

    /// The most recent surfaced error, if any
    pub last_error: Option<PlayerError>,
}
