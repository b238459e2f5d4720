use crate::artist::{Artist, Credential};
use crate::error::{NicheError, Result};
use crate::niche::NicheSearchEngine;
use crate::niche::frontier::with_timeout;
use crate::provider::ProviderError;
use futures::FutureExt;
use futures::stream::{self, StreamExt};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Searches over distinct top artists running at once
const TOP_ARTIST_SEARCHES_IN_FLIGHT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheRecommendation {
    pub niche_artist: Artist,
    pub original_artist: Artist,
}

impl NicheSearchEngine {
    /// Runs an independent niche search for each of the credential owner's
    /// top artists and merges the findings.
    ///
    /// A niche artist reachable from several top artists keeps the position
    /// of its first discovery and is attributed to the last one in top-artist
    /// order.
    pub async fn recommend_for_top_artists(
        &self,
        credential: &Credential,
        limit: usize,
    ) -> Result<Vec<NicheRecommendation>> {
        let top_artists = with_timeout(
            self.config().fetch_timeout,
            "top artists",
            self.provider().get_top_artists(credential, limit),
        )
        .await
        .map_err(|error| match error {
            ProviderError::Unauthorized(message) => NicheError::Unauthorized(message),
            other => NicheError::ProviderUnavailable(other.to_string()),
        })?;

        let searches: Vec<(Artist, Result<Vec<Artist>>)> = stream::iter(top_artists)
            .map(move |original: Artist| {
                async move {
                    let found = self
                        .find_niche(&original.id, credential)
                        .await
                        .map(|result| result.into_artists());
                    (original, found)
                }
                .boxed()
            })
            .buffered(TOP_ARTIST_SEARCHES_IN_FLIGHT)
            .collect()
            .await;

        let mut positions: FxHashMap<String, usize> = FxHashMap::default();
        let mut recommendations: Vec<NicheRecommendation> = Vec::new();

        for (original, found) in searches {
            let niche_artists = match found {
                Ok(artists) => artists,
                Err(NicheError::Unauthorized(message)) => {
                    return Err(NicheError::Unauthorized(message));
                }
                Err(error) => {
                    tracing::warn!(
                        artist_id = %original.id,
                        artist = %original.name,
                        %error,
                        "Skipping top artist after failed niche search"
                    );
                    continue;
                }
            };

            for niche_artist in niche_artists {
                let recommendation = NicheRecommendation {
                    niche_artist,
                    original_artist: original.clone(),
                };
                match positions.get(&recommendation.niche_artist.id) {
                    Some(&index) => recommendations[index] = recommendation,
                    None => {
                        positions.insert(
                            recommendation.niche_artist.id.clone(),
                            recommendations.len(),
                        );
                        recommendations.push(recommendation);
                    }
                }
            }
        }

        Ok(recommendations)
    }
}
