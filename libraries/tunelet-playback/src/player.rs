//! The playback queue controller.

use crate::engine::AudioOutput;
use crate::error::{PlayerError, Result};
use crate::events::PlayerEvent;
use crate::resolver::PreviewResolver;
use crate::types::{PlayerSnapshot, PlayerState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{info, warn};
use tunelet_core::Track;

/// The playback queue controller.
///
/// Owns the playback session: the currently selected track, the track
/// list supplied with the last selection, the engine adapter, and the
/// advance-on-finish policy. One instance exists per process.
///
/// All operations are non-blocking; the two suspension points are the
/// preview resolution inside [`Player::select`] and the finished
/// notification drained by [`Player::run`].
pub struct Player {
    session: Mutex<Session>,
    resolver: PreviewResolver,

    /// Monotonic selection generation. Every `select` (and `stop`)
    /// bumps it; a resolution completing under a stale generation is
    /// discarded instead of clobbering the newer selection.
    generation: AtomicU64,

    /// Receiver half of the finished-notification channel, taken by
    /// [`Player::run`].
    finished_rx: Mutex<Option<UnboundedReceiver<()>>>,
}

struct Session {
    engine: Box<dyn AudioOutput>,
    state: PlayerState,
    active_track: Option<Track>,
    resolved_source: Option<String>,
    last_error: Option<PlayerError>,
    /// The list supplied with the most recent `select`; "next" is
    /// computed against this view.
    list: Vec<Track>,
    pending_events: Vec<PlayerEvent>,
}

impl Session {
    fn set_state(&mut self, state: PlayerState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    /// Reset to the empty session, leaving `last_error` untouched.
    fn clear_active(&mut self) {
        self.active_track = None;
        self.resolved_source = None;
        self.set_state(PlayerState::Idle);
    }
}

impl Player {
    /// Create the player over an engine adapter and a resolver.
    ///
    /// The engine's finished notification is wired into an internal
    /// channel; spawn [`Player::run`] to have it drive the automatic
    /// advance.
    pub fn new(mut engine: Box<dyn AudioOutput>, resolver: PreviewResolver) -> Arc<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        engine.on_finished(Box::new(move || {
            let _ = tx.send(());
        }));

        Arc::new(Self {
            session: Mutex::new(Session {
                engine,
                state: PlayerState::Idle,
                active_track: None,
                resolved_source: None,
                last_error: None,
                list: Vec::new(),
                pending_events: Vec::new(),
            }),
            resolver,
            generation: AtomicU64::new(0),
            finished_rx: Mutex::new(Some(rx)),
        })
    }

    /// Pump finished notifications from the engine into
    /// [`Player::on_playback_finished`].
    ///
    /// Runs for the life of the player; spawn it once. Hosts that own
    /// their own event loop can skip this and call
    /// [`Player::on_playback_finished`] directly instead.
    pub async fn run(self: Arc<Self>) {
        let rx = lock(&self.finished_rx).take();
        let Some(mut rx) = rx else {
            warn!("Player::run called more than once");
            return;
        };
        while rx.recv().await.is_some() {
            self.on_playback_finished().await;
        }
    }

    /// Select `track` for playback against the caller-supplied `list`.
    ///
    /// Sets the active track, resolves its preview URL, loads it into
    /// the engine and plays it. Selecting the already-playing track
    /// reloads it from the start. A selection issued while an earlier
    /// one is still resolving supersedes it.
    ///
    /// # Errors
    /// On a resolution or engine failure the session returns to `Idle`
    /// with the error recorded; the failure is surfaced so the UI can
    /// present it. No automatic advance happens on failure.
    pub async fn select(&self, track: Track, list: &[Track]) -> Result<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(track_id = %track.id, title = %track.title, "Track selected");

        {
            let mut session = self.lock_session();
            let previous_track_id = session.active_track.as_ref().map(|t| t.id);
            session.active_track = Some(track.clone());
            session.resolved_source = None;
            session.last_error = None;
            session.list = list.to_vec();
            session.set_state(PlayerState::Resolving);
            session.pending_events.push(PlayerEvent::TrackChanged {
                track_id: track.id,
                previous_track_id,
            });
        }

        // Suspension point: no session lock is held across the lookup.
        let resolved = self.resolver.resolve(&track).await;

        let mut session = self.lock_session();
        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer selection (or a stop) superseded this one while
            // the resolution was in flight; swallow the result.
            warn!(track_id = %track.id, "Discarding stale resolution");
            return Ok(());
        }

        let loaded = resolved.and_then(|url| {
            session.engine.load(&url)?;
            session.engine.play()?;
            Ok(url)
        });

        match loaded {
            Ok(url) => {
                session.resolved_source = Some(url);
                session.set_state(PlayerState::Playing);
                info!(track_id = %track.id, "Playback started");
                Ok(())
            }
            Err(err) => {
                // The device must be quiet before the error surfaces.
                session.engine.pause();
                session.clear_active();
                session.last_error = Some(err.clone());
                session.pending_events.push(PlayerEvent::Error {
                    message: err.to_string(),
                });
                warn!(track_id = %track.id, error = %err, "Selection failed");
                Err(err)
            }
        }
    }

    /// Toggle between `Playing` and `Paused`.
    ///
    /// No-op from `Idle` or `Resolving`.
    ///
    /// # Errors
    /// Propagates an engine failure on resume; the session stays
    /// `Paused` in that case.
    pub fn toggle_play_pause(&self) -> Result<()> {
        let mut session = self.lock_session();
        match session.state {
            PlayerState::Playing => {
                session.engine.pause();
                session.set_state(PlayerState::Paused);
                Ok(())
            }
            PlayerState::Paused => {
                session.engine.play()?;
                session.set_state(PlayerState::Playing);
                Ok(())
            }
            PlayerState::Idle | PlayerState::Resolving => Ok(()),
        }
    }

    /// Handle the engine's finished notification: advance to the next
    /// track of the active list, wrapping around at the end.
    ///
    /// An empty list transitions to `Idle` without touching the
    /// engine; a single-item list replays its only track. A track that
    /// is no longer in the list advances to the front. A failed
    /// advance stops here rather than skipping ahead.
    pub async fn on_playback_finished(&self) {
        let (next_track, list) = {
            let mut session = self.lock_session();
            let Some(active) = session.active_track.clone() else {
                return;
            };
            session
                .pending_events
                .push(PlayerEvent::TrackFinished { track_id: active.id });

            if session.list.is_empty() {
                session.clear_active();
                return;
            }

            let position = session.list.iter().position(|t| t.id == active.id);
            let next_index = position.map_or(0, |i| (i + 1) % session.list.len());
            (session.list[next_index].clone(), session.list.clone())
        };

        info!(track_id = %next_track.id, "Advancing to next track");
        if let Err(err) = self.select(next_track, &list).await {
            // select already recorded and surfaced the error; a broken
            // track must not be skipped silently.
            warn!(error = %err, "Automatic advance failed");
        }
    }

    /// Stop playback and reset the session to `Idle`.
    ///
    /// Also invalidates any in-flight resolution.
    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut session = self.lock_session();
        session.engine.pause();
        session.clear_active();
        info!("Playback stopped");
    }

    // ===== State queries =====

    /// Current session state.
    pub fn state(&self) -> PlayerState {
        self.lock_session().state
    }

    /// The currently selected track, if any.
    pub fn active_track(&self) -> Option<Track> {
        self.lock_session().active_track.clone()
    }

    /// The resolved preview URL, once resolution has completed.
    pub fn resolved_source(&self) -> Option<String> {
        self.lock_session().resolved_source.clone()
    }

    /// The most recent surfaced error, if any.
    pub fn last_error(&self) -> Option<PlayerError> {
        self.lock_session().last_error.clone()
    }

    /// Whether the engine reports itself playing.
    pub fn is_playing(&self) -> bool {
        self.lock_session().engine.is_playing()
    }

    /// Point-in-time view of the whole session.
    pub fn snapshot(&self) -> PlayerSnapshot {
        let session = self.lock_session();
        PlayerSnapshot {
            state: session.state,
            active_track: session.active_track.clone(),
            resolved_source: session.resolved_source.clone(),
            last_error: session.last_error.clone(),
        }
    }

    // ===== Events =====

    /// Drain all events emitted since the last drain.
    ///
    /// The UI should call this periodically to synchronize with the
    /// session.
    pub fn drain_events(&self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.lock_session().pending_events)
    }

    /// Whether any events are waiting to be drained.
    pub fn has_pending_events(&self) -> bool {
        !self.lock_session().pending_events.is_empty()
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }
}

/// Lock a mutex, recovering from poisoning; the session is never left
/// in a torn state because no lock is held across a suspension point.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
