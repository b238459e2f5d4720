use crate::artist::{Artist, Credential};
use crate::provider::{ArtistGraphProvider, ProviderError};
use futures::FutureExt;
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::time::Duration;

/// Artists discovered by expanding every bridge of one level.
pub struct WaveOutcome {
    pub frontier: Vec<Artist>,
    pub fetched: usize,
    pub failed: usize,
}

/// Runs a provider call under `timeout`, reporting expiry as unavailability.
pub async fn with_timeout<T, F>(timeout: Duration, what: &str, call: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Unavailable(format!(
            "{} timed out after {}ms",
            what,
            timeout.as_millis()
        ))),
    }
}

pub async fn fetch_related(
    provider: &dyn ArtistGraphProvider,
    artist_id: &str,
    credential: &Credential,
    timeout: Duration,
) -> Result<Vec<Artist>, ProviderError> {
    let what = format!("related artists of {}", artist_id);
    with_timeout(timeout, &what, provider.get_related_artists(artist_id, credential)).await
}

/// Fetches the related artists of every bridge, at most `in_flight` at a
/// time. The next frontier keeps bridge order no matter which call finishes
/// first. A failed branch contributes nothing.
pub async fn expand_wave(
    provider: &dyn ArtistGraphProvider,
    bridges: &[Artist],
    credential: &Credential,
    timeout: Duration,
    in_flight: usize,
) -> WaveOutcome {
    let responses: Vec<(Artist, Result<Vec<Artist>, ProviderError>)> =
        stream::iter(bridges.iter().cloned())
            .map(move |bridge: Artist| {
                async move {
                    let related = fetch_related(provider, &bridge.id, credential, timeout).await;
                    (bridge, related)
                }
                .boxed()
            })
            .buffered(in_flight.max(1))
            .collect()
            .await;

    let mut outcome = WaveOutcome {
        frontier: Vec::new(),
        fetched: responses.len(),
        failed: 0,
    };

    for (bridge, related) in responses {
        match related {
            Ok(artists) => outcome.frontier.extend(artists),
            Err(error) => {
                outcome.failed += 1;
                tracing::warn!(
                    provider = provider.name(),
                    artist_id = %bridge.id,
                    artist = %bridge.name,
                    %error,
                    "Skipping branch after failed related-artists fetch"
                );
            }
        }
    }

    outcome
}
