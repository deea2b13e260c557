//! Tunelet - Playback Core
//!
//! The playback queue and preview-resolution controller for Tunelet.
//!
//! This crate provides:
//! - [`PreviewResolver`] - resolves a playable preview URL for a track,
//!   consulting a persistent cache before issuing a catalog lookup
//! - [`AudioOutput`] - adapter trait over the single physical audio
//!   output device (load/play/pause plus a finished notification)
//! - [`Player`] - the session state machine: owns the selected track,
//!   the active track list, and the advance-on-finish policy
//! - [`PlayerEvent`] - UI synchronization events, drained with
//!   [`Player::drain_events`]
//!
//! # Control flow
//!
//! The UI selects a track; the player resolves a preview URL, loads it
//! into the audio output, and plays it. When the device reports that
//! the source finished naturally, the player advances to the next
//! entry of the list supplied with the last selection, wrapping around
//! at the end.
//!
//! Exactly one [`Player`] exists per process: there is one physical
//! audio output and no parallel playback of two sources. The catalog
//! and the preview store are injected collaborators (see
//! `tunelet-core`); this crate never touches the network or the disk
//! itself.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod events;
mod player;
mod resolver;
pub mod types;

// Public exports
pub use engine::{AudioOutput, FinishedCallback};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use player::Player;
pub use resolver::PreviewResolver;
pub use types::{PlayerSnapshot, PlayerState};
