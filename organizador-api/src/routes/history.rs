use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{respond_all, HistoryEntryResponse},
    app_state::AppState,
    domain::models::TaskId,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/:id_tarefa", get(history_for_task))
}

#[instrument(name = "history_for_task", skip(app_state))]
pub async fn history_for_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> Result<Json<Vec<HistoryEntryResponse>>, ApiError> {
    let entries = app_state.history_service.history_for_task(task_id).await?;
    Ok(Json(respond_all(entries)))
}
