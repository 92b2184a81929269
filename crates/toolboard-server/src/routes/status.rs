use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use toolboard_core::docs;

/// GET /api/status — full aggregated snapshot plus source-document info.
pub async fn get_status(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let snapshot = app.snapshot()?;
        let documents = vec![
            docs::document_info(&app.root, &app.config.status_doc)?,
            docs::document_info(&app.root, &app.config.progress_doc)?,
        ];
        Ok::<_, toolboard_core::BoardError>(serde_json::json!({
            "tools": &snapshot.tools,
            "generated_at": snapshot.generated_at,
            "documents": documents,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
