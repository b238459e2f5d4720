use std::time::Duration;

/// Configuration for the niche search
#[derive(Debug, Clone)]
pub struct NicheSearchConfig {
    /// Artists with popularity strictly below this are niche (0-100)
    pub niche_threshold: u8,
    /// Stop expanding once this many niche artists were found
    pub target_count: usize,
    /// Levels of bridges expanded past the seed
    pub max_depth: usize,
    /// Upper bound for a single provider call
    pub fetch_timeout: Duration,
    /// Provider calls in flight per wave
    pub max_concurrent_fetches: usize,
}

impl NicheSearchConfig {
    pub fn new(niche_threshold: u8, target_count: usize, max_depth: usize) -> Self {
        Self {
            niche_threshold,
            target_count,
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn with_max_concurrent_fetches(mut self, max_concurrent_fetches: usize) -> Self {
        self.max_concurrent_fetches = max_concurrent_fetches.max(1);
        self
    }
}

impl Default for NicheSearchConfig {
    fn default() -> Self {
        Self {
            niche_threshold: 20,
            target_count: 3,
            max_depth: 2,
            fetch_timeout: Duration::from_secs(10),
            max_concurrent_fetches: 8,
        }
    }
}
