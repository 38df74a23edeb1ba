use axum::{Json, extract::State, response::IntoResponse};

use rock_types::api::TypeResponse;

use crate::auth::AppState;
use crate::error::{ApiError, run_blocking};

/// GET /types: the reference types a rock can be classified under.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = run_blocking(move || Ok(state.db.list_types()?)).await?;

    let types: Vec<TypeResponse> = rows
        .into_iter()
        .map(|row| TypeResponse { id: row.id, label: row.label })
        .collect();
    Ok(Json(types))
}
