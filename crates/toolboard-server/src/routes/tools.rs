use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::AppError;
use crate::state::AppState;
use toolboard_core::catalog::ToolCatalog;
use toolboard_core::record::ToolStatusRecord;
use toolboard_core::summary::ToolRow;
use toolboard_core::types::StatusCategory;

#[derive(Debug, Deserialize)]
pub struct ToolsQuery {
    pub category: Option<String>,
    pub status: Option<String>,
}

/// GET /api/tools — catalog-joined rows, optionally filtered by category
/// and/or status.
pub async fn list_tools(
    State(app): State<AppState>,
    Query(query): Query<ToolsQuery>,
) -> Result<Json<Vec<ToolRow>>, AppError> {
    let status_filter = query
        .status
        .as_deref()
        .map(StatusCategory::from_str)
        .transpose()?;

    let rows = tokio::task::spawn_blocking(move || {
        let snapshot = app.snapshot()?;
        let summary = snapshot.summary(&ToolCatalog::builtin());
        let rows: Vec<ToolRow> = summary
            .rows
            .into_iter()
            .filter(|r| {
                query
                    .category
                    .as_deref()
                    .map(|c| r.category == c)
                    .unwrap_or(true)
            })
            .filter(|r| status_filter.map(|s| r.status == s).unwrap_or(true))
            .collect();
        Ok::<_, toolboard_core::BoardError>(rows)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(rows))
}

/// GET /api/tools/{name} — one tool's full record, 404 when unknown.
pub async fn get_tool(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ToolStatusRecord>, AppError> {
    let record = tokio::task::spawn_blocking(move || {
        let snapshot = app.snapshot()?;
        snapshot
            .get(&name)
            .cloned()
            .ok_or(toolboard_core::BoardError::ToolNotFound(name))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(record))
}
