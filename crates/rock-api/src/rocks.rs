use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, warn};

use rock_db::models::RockRow;
use rock_types::api::{Claims, CreateRockRequest, RockOwnerResponse, RockQuery, RockResponse, RockTypeResponse};

use crate::auth::AppState;
use crate::error::{ApiError, run_blocking};

/// POST /rocks: create a rock owned by the requester.
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateRockRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = claims.sub;

    let row = run_blocking(move || {
        let rock_type = state.db.get_type(req.type_id)?.ok_or(ApiError::TypeNotFound)?;
        let id = state.db.insert_rock(user_id, rock_type.id, &req.name, req.weight)?;
        state
            .db
            .get_rock(id)?
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("rock {} missing after insert", id)))
    })
    .await?;

    info!("Rock {} '{}' created by {}", row.id, row.name, claims.username);
    Ok((StatusCode::CREATED, Json(rock_response(row))))
}

/// GET /rocks: every rock, or only the requester's with `?owner=current`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let owner = RockQuery::from_pairs(params)
        .current_owner_only()
        .then_some(claims.sub);

    let rows = run_blocking(move || Ok(state.db.list_rocks(owner)?)).await?;

    let rocks: Vec<RockResponse> = rows.into_iter().map(rock_response).collect();
    Ok(Json(rocks))
}

/// DELETE /rocks/{id}: only the owner may delete a rock.
pub async fn destroy(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, ApiError> {
    let Path(rock_id) = path?;
    let user_id = claims.sub;

    run_blocking(move || {
        let rock = state.db.get_rock(rock_id)?.ok_or(ApiError::RockNotFound)?;

        if rock.user_id != user_id {
            warn!("User {} tried to delete rock {} owned by {}", user_id, rock_id, rock.user_id);
            return Err(ApiError::NotOwner);
        }

        // Lost a race with another delete of the same rock
        if !state.db.delete_rock(rock_id)? {
            return Err(ApiError::RockNotFound);
        }
        Ok(())
    })
    .await?;

    info!("Rock {} deleted by {}", rock_id, claims.username);
    Ok(StatusCode::NO_CONTENT)
}

fn rock_response(row: RockRow) -> RockResponse {
    RockResponse {
        id: row.id,
        name: row.name,
        weight: row.weight,
        rock_type: RockTypeResponse { label: row.type_label },
        user: RockOwnerResponse {
            first_name: row.owner_first_name,
            last_name: row.owner_last_name,
        },
    }
}
