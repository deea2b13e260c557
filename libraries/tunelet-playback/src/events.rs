//! Player events for UI synchronization.
//!
//! Events are emitted at key points (state transitions, track changes,
//! surfaced errors) and drained by the UI via
//! [`Player::drain_events`](crate::Player::drain_events).

use crate::types::PlayerState;
use serde::{Deserialize, Serialize};
use tunelet_core::TrackId;

/// Events emitted by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Session state changed
    StateChanged {
        /// The new session state
        state: PlayerState,
    },

    /// The active track changed (selection or automatic advance)
    TrackChanged {
        /// ID of the newly selected track
        track_id: TrackId,
        /// ID of the previously selected track, if any
        previous_track_id: Option<TrackId>,
    },

    /// The active track played to its natural end
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// A selection failed; the message is user-presentable
    Error {
        /// Error message
        message: String,
    },
}
