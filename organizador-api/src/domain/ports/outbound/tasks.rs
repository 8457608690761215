//! Task repository port (outbound).

use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{Task, TaskData, TaskId, TaskStatus},
    OrganizerError,
};

#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// All tasks, ordered by id.
    async fn list(&self) -> Result<Vec<Task>, OrganizerError>;

    async fn get(&self, id: TaskId) -> Result<Option<Task>, OrganizerError>;

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Task>, OrganizerError>;

    async fn find_by_due_date(&self, due_date: Date) -> Result<Vec<Task>, OrganizerError>;

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, OrganizerError>;

    /// Stores a new task and returns it with its assigned id.
    async fn insert(&self, task: &TaskData) -> Result<Task, OrganizerError>;

    async fn update(&self, task: &Task) -> Result<(), OrganizerError>;

    async fn delete(&self, id: TaskId) -> Result<(), OrganizerError>;
}
