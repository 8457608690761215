//! Task history recorder port (outbound).
//!
//! The history is an append-only audit log: there is no way to edit or
//! remove an entry through this interface.

use async_trait::async_trait;

use crate::domain::{
    models::{HistoryEntry, NewHistoryEntry, TaskId},
    OrganizerError,
};

#[async_trait]
pub trait HistoryRepository: Send + Sync + 'static {
    /// Appends an entry and returns it with its assigned id.
    async fn record(&self, entry: &NewHistoryEntry) -> Result<HistoryEntry, OrganizerError>;

    /// Every entry for a task, in insertion order.
    async fn for_task(&self, task_id: TaskId) -> Result<Vec<HistoryEntry>, OrganizerError>;
}
