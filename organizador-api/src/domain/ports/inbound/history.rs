use async_trait::async_trait;

use crate::domain::{
    models::{HistoryEntry, TaskId},
    OrganizerError,
};

#[async_trait]
pub trait HistoryService: Send + Sync + 'static {
    /// The full history of a task, oldest first. Works for deleted tasks too.
    async fn history_for_task(&self, task_id: TaskId) -> Result<Vec<HistoryEntry>, OrganizerError>;
}
