use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use toolboard_core::catalog::ToolCatalog;
use toolboard_core::summary::StatusSummary;

/// GET /api/summary — catalog-joined counts and coverage.
pub async fn get_summary(State(app): State<AppState>) -> Result<Json<StatusSummary>, AppError> {
    let summary = tokio::task::spawn_blocking(move || {
        let snapshot = app.snapshot()?;
        Ok::<_, toolboard_core::BoardError>(snapshot.summary(&ToolCatalog::builtin()))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(summary))
}
