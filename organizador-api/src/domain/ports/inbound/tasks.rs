use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{Employee, EmployeeId, Task, TaskDraft, TaskId, TaskStatus},
    OrganizerError,
};

/// Inbound port for task use cases.
///
/// Every successful create, full update, reassignment, status change and
/// delete appends exactly one history entry. Title, description and due
/// date patches append nothing.
#[async_trait]
pub trait TaskService: Send + Sync + 'static {
    // ========================================================================
    // Queries
    // ========================================================================

    async fn get_task(&self, id: TaskId) -> Result<Task, OrganizerError>;

    async fn list_tasks(&self) -> Result<Vec<Task>, OrganizerError>;

    async fn find_by_title(&self, title: Option<String>) -> Result<Vec<Task>, OrganizerError>;

    async fn find_by_due_date(&self, due_date: Option<Date>) -> Result<Vec<Task>, OrganizerError>;

    async fn find_by_status(
        &self,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, OrganizerError>;

    /// The employee the task is assigned to.
    async fn get_responsible(&self, id: TaskId) -> Result<Employee, OrganizerError>;

    // ========================================================================
    // Mutations
    // ========================================================================

    async fn create_task(&self, draft: TaskDraft) -> Result<Task, OrganizerError>;

    async fn update_task(&self, id: TaskId, draft: TaskDraft) -> Result<(), OrganizerError>;

    async fn update_title(&self, id: TaskId, title: Option<String>) -> Result<(), OrganizerError>;

    async fn update_description(
        &self,
        id: TaskId,
        description: Option<String>,
    ) -> Result<(), OrganizerError>;

    async fn update_due_date(
        &self,
        id: TaskId,
        due_date: Option<Date>,
    ) -> Result<(), OrganizerError>;

    /// Reassigns the task; [`EmployeeId::UNASSIGNED`] clears the assignment.
    async fn update_employee(
        &self,
        id: TaskId,
        employee_id: Option<EmployeeId>,
    ) -> Result<(), OrganizerError>;

    /// Only assigned tasks may change status.
    async fn update_status(
        &self,
        id: TaskId,
        status: Option<TaskStatus>,
    ) -> Result<(), OrganizerError>;

    async fn delete_task(&self, id: TaskId) -> Result<(), OrganizerError>;
}
