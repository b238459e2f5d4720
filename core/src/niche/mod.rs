pub mod frontier;
pub mod state;

use crate::artist::{Artist, Credential};
use crate::error::{NicheError, Result};
use crate::niche_config::NicheSearchConfig;
use crate::provider::ArtistGraphProvider;
use frontier::{expand_wave, fetch_related};
use serde::{Deserialize, Serialize};
use state::SearchState;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Distinct artists considered, the seed excluded
    pub artists_visited: usize,
    /// Related-artist lookups issued, the seed lookup included
    pub fetch_count: usize,
    pub failed_fetches: usize,
    /// Levels of bridges expanded past the seed
    pub depth_reached: usize,
    pub duration_ms: u64,
}

/// Niche artists in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub artists: Vec<Artist>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artist> {
        self.artists.iter()
    }

    pub fn into_artists(self) -> Vec<Artist> {
        self.artists
    }
}

/// Depth-bounded expanding search for niche artists around a seed.
///
/// The engine is stateless between calls; every `find_niche` owns its own
/// [`SearchState`], so one engine can serve concurrent requests.
#[derive(Clone)]
pub struct NicheSearchEngine {
    provider: Arc<dyn ArtistGraphProvider>,
    config: NicheSearchConfig,
}

impl NicheSearchEngine {
    pub fn new(provider: Arc<dyn ArtistGraphProvider>, config: NicheSearchConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &NicheSearchConfig {
        &self.config
    }

    pub fn provider(&self) -> &dyn ArtistGraphProvider {
        self.provider.as_ref()
    }

    /// Walks the related-artist graph level by level from the seed.
    ///
    /// Only non-niche artists are expanded. The walk stops as soon as a
    /// level brings the result count to `target_count` or `max_depth` levels
    /// of bridges have been expanded past the seed. A failed seed lookup
    /// aborts the search; a failed lookup deeper down only drops that branch.
    pub async fn find_niche(
        &self,
        seed_artist_id: &str,
        credential: &Credential,
    ) -> Result<SearchResult> {
        let start_time = Instant::now();

        if seed_artist_id.trim().is_empty() {
            return Err(NicheError::SeedNotFound(seed_artist_id.to_string()));
        }

        let mut state = SearchState::new(seed_artist_id);
        let mut stats = SearchStats::default();

        let mut frontier = fetch_related(
            self.provider.as_ref(),
            seed_artist_id,
            credential,
            self.config.fetch_timeout,
        )
        .await
        .map_err(NicheError::from)?;
        stats.fetch_count += 1;

        loop {
            let frontier_size = frontier.len();
            let bridges = state.absorb_frontier(frontier, self.config.niche_threshold);

            tracing::debug!(
                seed = seed_artist_id,
                depth = state.depth(),
                frontier = frontier_size,
                bridges = bridges.len(),
                found = state.found(),
                "Absorbed frontier"
            );

            if state.is_satisfied(&self.config) || bridges.is_empty() {
                break;
            }

            state.descend();
            let wave = expand_wave(
                self.provider.as_ref(),
                &bridges,
                credential,
                self.config.fetch_timeout,
                self.config.max_concurrent_fetches,
            )
            .await;

            stats.fetch_count += wave.fetched;
            stats.failed_fetches += wave.failed;
            frontier = wave.frontier;
        }

        stats.artists_visited = state.artists_visited();
        stats.depth_reached = state.depth();
        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        let artists = state.into_results();

        tracing::info!(
            provider = self.provider.name(),
            seed = seed_artist_id,
            found = artists.len(),
            fetches = stats.fetch_count,
            failed = stats.failed_fetches,
            duration_ms = stats.duration_ms,
            "Niche search finished"
        );

        Ok(SearchResult { artists, stats })
    }
}
