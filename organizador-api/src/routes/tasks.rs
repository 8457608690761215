use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use time::Date;
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{respond_all, EmployeeResponse, TaskResponse},
    app_state::AppState,
    domain::models::{EmployeeId, TaskDraft, TaskId, TaskStatus},
    utils::dates,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_task))
        .route("/ObterTodos", get(list_tasks))
        .route("/ObterPorTitulo", get(find_by_title))
        .route("/ObterPorData", get(find_by_due_date))
        .route("/ObterPorStatus", get(find_by_status))
        .route("/ObterResponsavel/:id", get(get_responsible))
        .route("/AtualizarTitulo/:id", patch(update_title))
        .route("/AtualizarDescricao/:id", patch(update_description))
        .route("/AtualizarData/:id", patch(update_due_date))
        .route("/AtualizarFuncionario/:id", patch(update_employee))
        .route("/AtualizarStatus/:id", patch(update_status))
        .route(
            "/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    titulo: Option<String>,
    descricao: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_option")]
    data: Option<Date>,
    #[serde(default)]
    status: Option<TaskStatus>,
    #[serde(default, rename = "funcionarioId")]
    funcionario_id: Option<EmployeeId>,
}

impl From<TaskPayload> for TaskDraft {
    fn from(payload: TaskPayload) -> Self {
        Self {
            title: payload.titulo,
            description: payload.descricao,
            due_date: payload.data,
            status: payload.status.unwrap_or_default(),
            employee_id: payload.funcionario_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    titulo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionQuery {
    descricao: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    #[serde(default, deserialize_with = "dates::deserialize_option")]
    data: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    status: Option<TaskStatus>,
}

#[derive(Debug, Deserialize)]
pub struct AssigneeQuery {
    #[serde(rename = "idFuncionario")]
    id_funcionario: Option<EmployeeId>,
}

// ============================================================================
// Queries
// ============================================================================

#[instrument(name = "get_task", skip(app_state))]
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = app_state.task_service.get_task(id).await?;
    Ok(Json(task.into()))
}

#[instrument(name = "list_tasks", skip(app_state))]
pub async fn list_tasks(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = app_state.task_service.list_tasks().await?;
    Ok(Json(respond_all(tasks)))
}

#[instrument(name = "find_tasks_by_title", skip(app_state))]
pub async fn find_by_title(
    State(app_state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = app_state.task_service.find_by_title(query.titulo).await?;
    Ok(Json(respond_all(tasks)))
}

#[instrument(name = "find_tasks_by_due_date", skip(app_state))]
pub async fn find_by_due_date(
    State(app_state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = app_state.task_service.find_by_due_date(query.data).await?;
    Ok(Json(respond_all(tasks)))
}

#[instrument(name = "find_tasks_by_status", skip(app_state))]
pub async fn find_by_status(
    State(app_state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = app_state.task_service.find_by_status(query.status).await?;
    Ok(Json(respond_all(tasks)))
}

#[instrument(name = "get_task_responsible", skip(app_state))]
pub async fn get_responsible(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = app_state.task_service.get_responsible(id).await?;
    Ok(Json(employee.into()))
}

// ============================================================================
// Mutations
// ============================================================================

#[instrument(name = "create_task", skip(app_state))]
pub async fn create_task(
    State(app_state): State<AppState>,
    Json(body): Json<TaskPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let task = app_state.task_service.create_task(body.into()).await?;

    let location = format!("/Tarefa/{}", task.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TaskResponse::from(task)),
    ))
}

#[instrument(name = "update_task", skip(app_state))]
pub async fn update_task(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(body): Json<TaskPayload>,
) -> Result<StatusCode, ApiError> {
    app_state.task_service.update_task(id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_task_title", skip(app_state))]
pub async fn update_title(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
    Query(query): Query<TitleQuery>,
) -> Result<StatusCode, ApiError> {
    app_state.task_service.update_title(id, query.titulo).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_task_description", skip(app_state))]
pub async fn update_description(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
    Query(query): Query<DescriptionQuery>,
) -> Result<StatusCode, ApiError> {
    app_state
        .task_service
        .update_description(id, query.descricao)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_task_due_date", skip(app_state))]
pub async fn update_due_date(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
    Query(query): Query<DateQuery>,
) -> Result<StatusCode, ApiError> {
    app_state
        .task_service
        .update_due_date(id, query.data)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_task_employee", skip(app_state))]
pub async fn update_employee(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
    Query(query): Query<AssigneeQuery>,
) -> Result<StatusCode, ApiError> {
    app_state
        .task_service
        .update_employee(id, query.id_funcionario)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_task_status", skip(app_state))]
pub async fn update_status(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
    Query(query): Query<StatusQuery>,
) -> Result<StatusCode, ApiError> {
    app_state
        .task_service
        .update_status(id, query.status)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "delete_task", skip(app_state))]
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    app_state.task_service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
