use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{respond_all, EmployeeResponse},
    app_state::AppState,
    domain::models::{EmployeeDraft, EmployeeId},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee))
        .route("/ObterTodos", get(list_employees))
        .route("/ObterPorNome", get(find_by_name))
        .route("/ObterPorEmail", get(find_by_email))
        .route("/ObterPorTelefone", get(find_by_phone))
        .route("/AtualizarNome/:id", patch(update_name))
        .route("/AtualizarEmail/:id", patch(update_email))
        .route("/AtualizarTelefone/:id", patch(update_phone))
        .route(
            "/:id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct EmployeePayload {
    nome: Option<String>,
    email: Option<String>,
    telefone: Option<String>,
}

impl From<EmployeePayload> for EmployeeDraft {
    fn from(payload: EmployeePayload) -> Self {
        Self {
            name: payload.nome,
            email: payload.email,
            phone: payload.telefone,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    nome: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PhoneQuery {
    telefone: Option<String>,
}

// ============================================================================
// Queries
// ============================================================================

#[instrument(name = "list_employees", skip(app_state))]
pub async fn list_employees(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = app_state.employee_service.list_employees().await?;
    Ok(Json(respond_all(employees)))
}

#[instrument(name = "get_employee", skip(app_state))]
pub async fn get_employee(
    State(app_state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = app_state.employee_service.get_employee(id).await?;
    Ok(Json(employee.into()))
}

#[instrument(name = "find_employees_by_name", skip(app_state))]
pub async fn find_by_name(
    State(app_state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = app_state.employee_service.find_by_name(query.nome).await?;
    Ok(Json(respond_all(employees)))
}

#[instrument(name = "find_employees_by_email", skip(app_state))]
pub async fn find_by_email(
    State(app_state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = app_state.employee_service.find_by_email(query.email).await?;
    Ok(Json(respond_all(employees)))
}

#[instrument(name = "find_employees_by_phone", skip(app_state))]
pub async fn find_by_phone(
    State(app_state): State<AppState>,
    Query(query): Query<PhoneQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = app_state
        .employee_service
        .find_by_phone(query.telefone)
        .await?;
    Ok(Json(respond_all(employees)))
}

// ============================================================================
// Mutations
// ============================================================================

#[instrument(name = "create_employee", skip(app_state))]
pub async fn create_employee(
    State(app_state): State<AppState>,
    Json(body): Json<EmployeePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = app_state
        .employee_service
        .create_employee(body.into())
        .await?;

    let location = format!("/Funcionario/{}", employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EmployeeResponse::from(employee)),
    ))
}

#[instrument(name = "update_employee", skip(app_state))]
pub async fn update_employee(
    State(app_state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Json(body): Json<EmployeePayload>,
) -> Result<StatusCode, ApiError> {
    app_state
        .employee_service
        .update_employee(id, body.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_employee_name", skip(app_state))]
pub async fn update_name(
    State(app_state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Query(query): Query<NameQuery>,
) -> Result<StatusCode, ApiError> {
    app_state.employee_service.update_name(id, query.nome).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_employee_email", skip(app_state))]
pub async fn update_email(
    State(app_state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Query(query): Query<EmailQuery>,
) -> Result<StatusCode, ApiError> {
    app_state
        .employee_service
        .update_email(id, query.email)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "update_employee_phone", skip(app_state))]
pub async fn update_phone(
    State(app_state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Query(query): Query<PhoneQuery>,
) -> Result<StatusCode, ApiError> {
    app_state
        .employee_service
        .update_phone(id, query.telefone)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "delete_employee", skip(app_state))]
pub async fn delete_employee(
    State(app_state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, ApiError> {
    app_state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
