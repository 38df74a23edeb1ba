//! Error type shared by the rock and type handlers.

use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use rock_types::api::MessageResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No rock has the requested id.
    #[error("Rock matching query does not exist.")]
    RockNotFound,

    /// The `typeId` of a new rock references no type.
    #[error("Type matching query does not exist.")]
    TypeNotFound,

    /// The requester is authenticated but does not own the rock.
    #[error("You do not own that rock")]
    NotOwner,

    /// The rock id in the path is not an integer.
    #[error(transparent)]
    InvalidId(#[from] PathRejection),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RockNotFound => StatusCode::NOT_FOUND,
            ApiError::TypeNotFound => StatusCode::BAD_REQUEST,
            ApiError::NotOwner => StatusCode::FORBIDDEN,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!("Request failed: {:#}", e);
        }
        let status = self.status();
        (status, Json(MessageResponse { message: self.to_string() })).into_response()
    }
}

/// Run blocking DB work off the async runtime.
pub(crate) async fn run_blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.into())
        })?
}
