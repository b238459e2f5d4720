use crate::models::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nichefy_core::{NicheError, ProviderError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not authenticated. Please log in with Spotify.")]
    MissingCredential,

    #[error(transparent)]
    Search(#[from] NicheError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingCredential => StatusCode::UNAUTHORIZED,
            ApiError::Search(NicheError::SeedNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Search(NicheError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Search(NicheError::ProviderUnavailable(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Provider(ProviderError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Provider(ProviderError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Provider(ProviderError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "Request failed upstream");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
