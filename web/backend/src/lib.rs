pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod spotify;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use std::sync::Arc;

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/recommend/niche", post(handlers::recommend_niche))
        .route("/api/recommend/user", post(handlers::recommend_for_user))
        .route("/api/search/artists", get(handlers::search_artists))
        .route("/api/artists/:id", get(handlers::get_artist))
        .with_state(app_state)
}
