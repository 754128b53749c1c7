//! Axum route handler for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::generator::generate_plant_info;
use crate::generation::profile::PlantRequest;
use crate::state::AppState;

/// POST /generate
///
/// Returns the model's localized profile for `name` exactly as parsed.
/// Any failure past body extraction becomes the uniform 500.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<PlantRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;

    let profile = generate_plant_info(&request.name, state.llm.as_ref(), state.generation).await?;

    Ok(Json(profile))
}
