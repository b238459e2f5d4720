pub mod artist;
pub mod error;
pub mod niche;
pub mod niche_config;
pub mod provider;
pub mod recommend;

// Re-export commonly used items
pub use artist::{Artist, Credential, MAX_POPULARITY};
pub use error::NicheError;
pub use niche::{NicheSearchEngine, SearchResult, SearchStats};
pub use niche_config::NicheSearchConfig;
pub use provider::{ArtistGraphProvider, ProviderError};
pub use recommend::NicheRecommendation;
