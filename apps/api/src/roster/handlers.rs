use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub consultants: usize,
}

/// POST /api/roster/reload
///
/// Re-reads the roster file and swaps it in. In-flight requests keep the
/// snapshot they already hold.
pub async fn handle_reload(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let store = state.roster.clone();
    let reloaded = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    match reloaded {
        Some(consultants) => Ok(Json(ReloadResponse { consultants })),
        None => Err(AppError::Validation(
            "Roster is embedded in the binary; set ROSTER_PATH to enable reloading".to_string(),
        )),
    }
}
