//! Property test for the advance-on-finish law: from any position in a
//! non-empty list, a finished track advances to `(position + 1)` modulo
//! the list length.

use async_trait::async_trait;
use proptest::prelude::*;
use std::sync::Arc;
use tunelet_core::{
    Catalog, CatalogError, PreviewStore, StoreError, Track, TrackDetail, TrackId, TrackPage,
};
use tunelet_playback::{AudioOutput, FinishedCallback, Player, PlayerError, PreviewResolver};

/// Catalog that serves a synthetic preview for every track.
struct UniversalCatalog;

#[async_trait]
impl Catalog for UniversalCatalog {
    async fn track_detail(&self, id: TrackId) -> Result<TrackDetail, CatalogError> {
        Ok(TrackDetail {
            id,
            preview_url: Some(format!("https://cdn.example.com/{id}.mp3")),
        })
    }

    async fn chart_tracks(&self, _index: u32) -> Result<TrackPage, CatalogError> {
        Ok(TrackPage {
            tracks: Vec::new(),
            total: Some(0),
            next_index: None,
        })
    }

    async fn search(&self, _query: &str) -> Result<Vec<Track>, CatalogError> {
        Ok(Vec::new())
    }
}

/// Store that never hits and never fails.
struct NullStore;

impl PreviewStore for NullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Engine that accepts everything.
struct NullEngine {
    loaded: bool,
}

impl AudioOutput for NullEngine {
    fn load(&mut self, _url: &str) -> Result<(), PlayerError> {
        self.loaded = true;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        if !self.loaded {
            return Err(PlayerError::NoSourceLoaded);
        }
        Ok(())
    }

    fn pause(&mut self) {}

    fn is_playing(&self) -> bool {
        self.loaded
    }

    fn on_finished(&mut self, _callback: FinishedCallback) {}
}

fn track(id: u64) -> Track {
    Track {
        id: TrackId(id),
        title: format!("Track {id}"),
        artist: "Property Artist".to_string(),
        cover_url: String::new(),
        duration_secs: 30,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn advance_wraps_modulo_list_length(len in 1usize..32, start in 0usize..32) {
        let start = start % len;
        let list: Vec<Track> = (0..len as u64).map(track).collect();

        let resolver = PreviewResolver::new(Arc::new(UniversalCatalog), Arc::new(NullStore));
        let player = Player::new(Box::new(NullEngine { loaded: false }), resolver);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime.block_on(async {
            player.select(list[start].clone(), &list).await.unwrap();
            player.on_playback_finished().await;
        });

        let expected = list[(start + 1) % len].id;
        prop_assert_eq!(player.active_track().map(|t| t.id), Some(expected));
    }
}
