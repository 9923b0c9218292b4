//! Axum route handlers for the Roast API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::input::{check_length, require_text};
use crate::roast::intensity::{IntensityProfile, RoastIntensity, ALL_INTENSITIES};
use crate::roast::prompts::{build_roast_prompt, RoastPrompt};
use crate::roast::{format_roast, FormattedRoast};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub resume_text: String,
    /// Accepts the canonical names plus aliases ("mild", "savage"). Defaults to honest.
    pub intensity: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roast/format
///
/// Cleans raw roast text and splits it into rendered section cards.
/// Empty text is valid and yields an empty result.
pub async fn handle_format(
    State(state): State<AppState>,
    Json(request): Json<FormatRequest>,
) -> Result<Json<FormattedRoast>, AppError> {
    check_length("raw_text", &request.raw_text, state.config.max_input_chars)?;
    Ok(Json(format_roast(&request.raw_text)))
}

/// GET /api/v1/roast/intensities
pub async fn handle_list_intensities() -> Json<Vec<IntensityProfile>> {
    Json(ALL_INTENSITIES.iter().map(RoastIntensity::profile).collect())
}

/// POST /api/v1/roast/prompt
///
/// Builds the system and user messages the client sends to the text-generation service.
pub async fn handle_build_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<RoastPrompt>, AppError> {
    require_text("resume_text", &request.resume_text, state.config.max_input_chars)?;

    let intensity = match request.intensity.as_deref() {
        Some(raw) => raw.parse::<RoastIntensity>()?,
        None => RoastIntensity::default(),
    };

    let prompt = build_roast_prompt(
        &request.resume_text,
        intensity,
        state.config.prompt_resume_chars,
    );
    if prompt.truncated {
        info!(
            intensity = %intensity,
            limit = state.config.prompt_resume_chars,
            "resume text truncated for roast prompt"
        );
    }

    Ok(Json(prompt))
}
