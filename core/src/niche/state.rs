use crate::artist::Artist;
use crate::niche_config::NicheSearchConfig;
use rustc_hash::FxHashSet;

/// Per-search bookkeeping, owned by a single `find_niche` call.
pub struct SearchState {
    visited: FxHashSet<String>,
    results: Vec<Artist>,
    depth: usize,
}

impl SearchState {
    pub fn new(seed_id: &str) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(seed_id.to_string());

        Self {
            visited,
            results: Vec::new(),
            depth: 0,
        }
    }

    /// Records that the bridges of the current level are being expanded.
    pub fn descend(&mut self) {
        self.depth += 1;
    }

    /// Visits every unseen artist of the frontier in order. Niche artists
    /// become results, the rest are returned as bridges to the next level.
    pub fn absorb_frontier(&mut self, frontier: Vec<Artist>, niche_threshold: u8) -> Vec<Artist> {
        let mut bridges = Vec::new();

        for artist in frontier {
            if !self.visit(&artist.id) {
                continue;
            }

            if artist.is_niche(niche_threshold) {
                self.results.push(artist);
            } else {
                bridges.push(artist);
            }
        }

        bridges
    }

    fn visit(&mut self, artist_id: &str) -> bool {
        if self.visited.contains(artist_id) {
            return false;
        }
        self.visited.insert(artist_id.to_string())
    }

    pub fn is_satisfied(&self, config: &NicheSearchConfig) -> bool {
        self.results.len() >= config.target_count || self.depth >= config.max_depth
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn found(&self) -> usize {
        self.results.len()
    }

    /// Distinct artists seen so far, the seed excluded.
    pub fn artists_visited(&self) -> usize {
        self.visited.len().saturating_sub(1)
    }

    pub fn into_results(self) -> Vec<Artist> {
        self.results
    }
}
