use crate::provider::ProviderError;

/// Terminal failures of a niche search
///
/// Only the seed lookup can produce one of these. Failures deeper in the
/// graph are absorbed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NicheError {
    #[error("Seed artist '{0}' not found")]
    SeedNotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Artist provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl From<ProviderError> for NicheError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::NotFound(id) => NicheError::SeedNotFound(id),
            ProviderError::Unauthorized(message) => NicheError::Unauthorized(message),
            ProviderError::Unavailable(message) => NicheError::ProviderUnavailable(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, NicheError>;
