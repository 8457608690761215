//! HTTP response types.
//!
//! Field names follow the wire contract clients already use (`nome`,
//! `funcionarioId`, ...), independent of the domain's naming.

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::{
    domain::models::{Employee, HistoryEntry, Task, TaskStatus},
    utils::dates,
};

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.as_i32(),
            name: employee.name,
            email: employee.email,
            phone: employee.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    /// Due date in YYYY-MM-DD format.
    #[serde(rename = "data", serialize_with = "dates::serialize")]
    pub due_date: Date,
    pub status: TaskStatus,
    /// `0` when nobody is assigned.
    #[serde(rename = "funcionarioId")]
    pub employee_id: i32,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.as_i32(),
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
            employee_id: task.employee_id.as_i32(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub id: i32,
    #[serde(rename = "tarefaId")]
    pub task_id: i32,
    #[serde(rename = "funcionarioId")]
    pub employee_id: i32,
    #[serde(rename = "statusTarefa")]
    pub status: TaskStatus,
    /// When the entry was recorded (RFC 3339).
    #[serde(rename = "dataRegistro", with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id.as_i32(),
            task_id: entry.task_id.as_i32(),
            employee_id: entry.employee_id.as_i32(),
            status: entry.status,
            recorded_at: entry.recorded_at,
        }
    }
}

/// Converts a list of domain values into their response shape.
pub fn respond_all<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
