//! Artist graph provider abstraction
//!
//! The engine only ever talks to a catalog through this trait, so the
//! Spotify adapter and the in-memory test graphs are interchangeable.

use crate::artist::{Artist, Credential};
use async_trait::async_trait;

/// Errors reported by a graph provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Artist {0} not found")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of artist metadata and similarity edges
///
/// Every call is a potentially slow remote lookup. Implementations may
/// retry internally; the engine never does.
#[async_trait]
pub trait ArtistGraphProvider: Send + Sync {
    async fn get_artist(&self, id: &str, credential: &Credential) -> Result<Artist, ProviderError>;

    /// Related artists in the provider's own relevance order.
    async fn get_related_artists(
        &self,
        id: &str,
        credential: &Credential,
    ) -> Result<Vec<Artist>, ProviderError>;

    /// The credential owner's most listened artists.
    ///
    /// Default implementation returns an empty list (not every catalog has
    /// a notion of a current user).
    async fn get_top_artists(
        &self,
        _credential: &Credential,
        _limit: usize,
    ) -> Result<Vec<Artist>, ProviderError> {
        Ok(vec![])
    }

    async fn search_artists(
        &self,
        _query: &str,
        _limit: usize,
        _credential: &Credential,
    ) -> Result<Vec<Artist>, ProviderError> {
        Ok(vec![])
    }

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
