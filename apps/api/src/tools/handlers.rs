//! Axum route handlers for the toolkit API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::input::require_text;
use crate::state::AppState;
use crate::tools::analytics::{analyze_resume, ResumeAnalytics};
use crate::tools::keywords::{match_keywords, KeywordMatchReport};
use crate::tools::power_words::{find_weak_phrases, PowerWordCategory, WeakPhraseHit, POWER_WORDS};

#[derive(Debug, Deserialize)]
pub struct KeywordMatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct WeakPhraseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct WeakPhraseResponse {
    pub hits: Vec<WeakPhraseHit>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsRequest {
    pub resume_text: String,
}

/// POST /api/v1/tools/keywords
pub async fn handle_keyword_match(
    State(state): State<AppState>,
    Json(request): Json<KeywordMatchRequest>,
) -> Result<Json<KeywordMatchReport>, AppError> {
    let limit = state.config.max_input_chars;
    require_text("resume_text", &request.resume_text, limit)?;
    require_text("job_description", &request.job_description, limit)?;

    Ok(Json(match_keywords(
        &request.resume_text,
        &request.job_description,
    )))
}

/// GET /api/v1/tools/power-words
pub async fn handle_power_words() -> Json<&'static [PowerWordCategory]> {
    Json(POWER_WORDS)
}

/// POST /api/v1/tools/power-words
///
/// Flags weak phrasing in the submitted text, with stronger alternatives.
pub async fn handle_weak_phrases(
    State(state): State<AppState>,
    Json(request): Json<WeakPhraseRequest>,
) -> Result<Json<WeakPhraseResponse>, AppError> {
    require_text("text", &request.text, state.config.max_input_chars)?;
    Ok(Json(WeakPhraseResponse {
        hits: find_weak_phrases(&request.text),
    }))
}

/// POST /api/v1/tools/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Json<ResumeAnalytics>, AppError> {
    require_text("resume_text", &request.resume_text, state.config.max_input_chars)?;
    Ok(Json(analyze_resume(&request.resume_text)))
}
