use crate::config::ServerConfig;
use crate::spotify::SpotifyClient;
use nichefy_core::NicheSearchEngine;
use std::sync::Arc;

pub struct AppState {
    pub engine: NicheSearchEngine,
    pub top_artists_limit: usize,
}

impl AppState {
    pub fn new(engine: NicheSearchEngine, top_artists_limit: usize) -> Self {
        Self {
            engine,
            top_artists_limit,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let spotify = SpotifyClient::new(&config.spotify_base_url, config.search.fetch_timeout)?;
        let engine = NicheSearchEngine::new(Arc::new(spotify), config.search.clone());

        tracing::info!(
            base_url = %config.spotify_base_url,
            niche_threshold = config.search.niche_threshold,
            target_count = config.search.target_count,
            max_depth = config.search.max_depth,
            "Niche search engine ready"
        );

        Ok(Self::new(engine, config.top_artists_limit))
    }
}
