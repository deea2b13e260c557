//! Playback engine adapter trait.
//!
//! Abstracts the single physical audio output device (ExoPlayer,
//! AVPlayer, a desktop backend, ...) behind a narrow contract the
//! player can orchestrate.

use crate::error::Result;

/// Notification fired when the loaded source completes playback.
pub type FinishedCallback = Box<dyn FnMut() + Send>;

/// Adapter over one stateful audio output device.
///
/// Exactly one instance is expected per process; it is handed to
/// [`Player::new`](crate::Player::new) at construction rather than
/// reached through a global.
///
/// Implementations hold no background thread the caller must manage;
/// the finished callback is the sole notification point of the whole
/// core.
pub trait AudioOutput: Send {
    /// Replace the current source with `url`.
    ///
    /// Any in-progress playback is stopped first; calling this while
    /// already playing is safe (implicit stop-then-load).
    ///
    /// # Errors
    /// Returns an error if the device rejects the source.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Begin or resume playback of the loaded source.
    ///
    /// No-op while already playing.
    ///
    /// # Errors
    /// Returns [`PlayerError::NoSourceLoaded`](crate::PlayerError::NoSourceLoaded)
    /// if nothing has been loaded.
    fn play(&mut self) -> Result<()>;

    /// Suspend playback, retaining position. No-op while paused.
    fn pause(&mut self);

    /// Whether the device is currently playing.
    fn is_playing(&self) -> bool;

    /// Register the finished notification.
    ///
    /// The callback fires exactly once when the loaded source plays to
    /// its end; it never fires on a manual pause or stop.
    fn on_finished(&mut self, callback: FinishedCallback);
}
