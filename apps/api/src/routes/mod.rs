pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::roast::handlers as roast;
use crate::state::AppState;
use crate::tools::handlers as tools;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roast API
        .route("/api/v1/roast/format", post(roast::handle_format))
        .route("/api/v1/roast/intensities", get(roast::handle_list_intensities))
        .route("/api/v1/roast/prompt", post(roast::handle_build_prompt))
        // Toolkit API
        .route("/api/v1/tools/keywords", post(tools::handle_keyword_match))
        .route(
            "/api/v1/tools/power-words",
            get(tools::handle_power_words).post(tools::handle_weak_phrases),
        )
        .route("/api/v1/tools/analytics", post(tools::handle_analytics))
        .fallback(not_found)
        .with_state(state)
}
