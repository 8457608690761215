use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use time::Date;

use super::{EmployeeId, TaskId};

/// Where a task stands. Any status may follow any other.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "StatusRepr")]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Pendente")]
    #[strum(serialize = "Pendente", ascii_case_insensitive)]
    Pending = 0,
    #[serde(rename = "Refinamento")]
    #[strum(serialize = "Refinamento", ascii_case_insensitive)]
    Refinement = 1,
    #[serde(rename = "Desenvolvimento")]
    #[strum(serialize = "Desenvolvimento", ascii_case_insensitive)]
    Development = 2,
    #[serde(rename = "Testes")]
    #[strum(serialize = "Testes", ascii_case_insensitive)]
    Testing = 3,
    #[serde(rename = "Finalizado")]
    #[strum(serialize = "Finalizado", ascii_case_insensitive)]
    Done = 4,
}

impl TaskStatus {
    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown task status: {0}")]
pub struct UnknownStatus(String);

impl TryFrom<i32> for TaskStatus {
    type Error = UnknownStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Refinement),
            2 => Ok(Self::Development),
            3 => Ok(Self::Testing),
            4 => Ok(Self::Done),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Accepted input shapes for a status: its ordinal or its name.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Ordinal(i32),
    Name(String),
}

impl TryFrom<StatusRepr> for TaskStatus {
    type Error = UnknownStatus;

    fn try_from(repr: StatusRepr) -> Result<Self, Self::Error> {
        match repr {
            StatusRepr::Ordinal(ordinal) => Self::try_from(ordinal),
            // Query strings deliver ordinals as text too.
            StatusRepr::Name(name) => match name.trim().parse::<i32>() {
                Ok(ordinal) => Self::try_from(ordinal),
                Err(_) => Self::from_str(name.trim()).map_err(|_| UnknownStatus(name)),
            },
        }
    }
}

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Date,
    pub status: TaskStatus,
    pub employee_id: EmployeeId,
}

impl Task {
    pub fn new(id: TaskId, data: TaskData) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            employee_id: data.employee_id,
        }
    }

    pub fn replace(&mut self, data: TaskData) {
        self.title = data.title;
        self.description = data.description;
        self.due_date = data.due_date;
        self.status = data.status;
        self.employee_id = data.employee_id;
    }

    pub fn is_assigned(&self) -> bool {
        self.employee_id.is_assigned()
    }
}

/// Task fields as sent by a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub status: TaskStatus,
    pub employee_id: EmployeeId,
}

/// Validated task fields, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Date,
    pub status: TaskStatus,
    pub employee_id: EmployeeId,
}
