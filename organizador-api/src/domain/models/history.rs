use time::OffsetDateTime;

use super::{EmployeeId, HistoryEntryId, Task, TaskId, TaskStatus};

/// A recorded snapshot of a task's assignment and status.
///
/// Entries are never edited or removed, not even when their task is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    pub task_id: TaskId,
    pub employee_id: EmployeeId,
    pub status: TaskStatus,
    pub recorded_at: OffsetDateTime,
}

/// A history entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub task_id: TaskId,
    pub employee_id: EmployeeId,
    pub status: TaskStatus,
    pub recorded_at: OffsetDateTime,
}

impl NewHistoryEntry {
    /// Stamps the current time.
    pub fn new(task_id: TaskId, employee_id: EmployeeId, status: TaskStatus) -> Self {
        Self {
            task_id,
            employee_id,
            status,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }

    /// Captures the task as it is right now.
    pub fn snapshot(task: &Task) -> Self {
        Self::new(task.id, task.employee_id, task.status)
    }
}
