use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{HistoryEntry, TaskId},
    ports::{inbound::HistoryService, outbound::HistoryRepository},
    OrganizerError, Subject,
};

pub struct HistoryServiceImpl<H> {
    history: Arc<H>,
}

impl<H> HistoryServiceImpl<H> {
    pub fn new(history: Arc<H>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl<H: HistoryRepository> HistoryService for HistoryServiceImpl<H> {
    async fn history_for_task(&self, task_id: TaskId) -> Result<Vec<HistoryEntry>, OrganizerError> {
        let entries = self.history.for_task(task_id).await?;
        if entries.is_empty() {
            return Err(OrganizerError::not_found(Subject::History));
        }
        Ok(entries)
    }
}
