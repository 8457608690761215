use std::sync::Arc;

use async_trait::async_trait;
use time::Date;

use crate::{
    domain::{
        models::{
            Employee, EmployeeId, NewHistoryEntry, Task, TaskData, TaskDraft, TaskId, TaskStatus,
        },
        ports::{
            inbound::TaskService,
            outbound::{EmployeeRepository, HistoryRepository, TaskRepository},
        },
        services::employees::lookup_employee,
        validation::{check_due_date, present, required},
        OrganizerError, Rejection, Subject,
    },
    utils::dates,
};

/// Implementation of the TaskService inbound port.
///
/// Writes go to the task repository first; the matching history entry is
/// appended afterwards as a separate statement.
pub struct TaskServiceImpl<T, E, H> {
    tasks: Arc<T>,
    employees: Arc<E>,
    history: Arc<H>,
    today: fn() -> Date,
}

impl<T, E, H> TaskServiceImpl<T, E, H> {
    pub fn new(tasks: Arc<T>, employees: Arc<E>, history: Arc<H>) -> Self {
        Self {
            tasks,
            employees,
            history,
            today: dates::today,
        }
    }

    /// Replaces the source of "today" used by the due-date rules.
    #[allow(dead_code)]
    pub fn with_clock(mut self, today: fn() -> Date) -> Self {
        self.today = today;
        self
    }
}

impl<T, E, H> TaskServiceImpl<T, E, H>
where
    T: TaskRepository,
    E: EmployeeRepository,
    H: HistoryRepository,
{
    async fn existing(&self, id: TaskId) -> Result<Task, OrganizerError> {
        self.tasks
            .get(id)
            .await?
            .ok_or(OrganizerError::not_found(Subject::Task))
    }

    /// `0` always resolves (to nobody); anything else must be a stored employee.
    async fn resolve_assignee(&self, employee_id: EmployeeId) -> Result<EmployeeId, OrganizerError> {
        if !employee_id.is_assigned() {
            return Ok(EmployeeId::UNASSIGNED);
        }

        match self.employees.get(employee_id).await? {
            Some(employee) => Ok(employee.id),
            None => Err(OrganizerError::not_found(Subject::Employee)),
        }
    }

    async fn record(&self, task: &Task) -> Result<(), OrganizerError> {
        let entry = self.history.record(&NewHistoryEntry::snapshot(task)).await?;
        tracing::debug!(
            task_id = %task.id,
            history_id = %entry.id,
            status = %task.status,
            "task history recorded"
        );
        Ok(())
    }

    fn matches<V>(found: Vec<V>) -> Result<Vec<V>, OrganizerError> {
        if found.is_empty() {
            Err(OrganizerError::not_found(Subject::Task))
        } else {
            Ok(found)
        }
    }
}

#[async_trait]
impl<T, E, H> TaskService for TaskServiceImpl<T, E, H>
where
    T: TaskRepository,
    E: EmployeeRepository,
    H: HistoryRepository,
{
    async fn get_task(&self, id: TaskId) -> Result<Task, OrganizerError> {
        self.existing(id).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, OrganizerError> {
        self.tasks.list().await
    }

    async fn find_by_title(&self, title: Option<String>) -> Result<Vec<Task>, OrganizerError> {
        let title = present(title, Subject::Title)?;
        Self::matches(self.tasks.find_by_title_containing(&title).await?)
    }

    async fn find_by_due_date(&self, due_date: Option<Date>) -> Result<Vec<Task>, OrganizerError> {
        let due_date = present(due_date, Subject::Date)?;
        Self::matches(self.tasks.find_by_due_date(due_date).await?)
    }

    async fn find_by_status(
        &self,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, OrganizerError> {
        let status = present(status, Subject::Status)?;
        Self::matches(self.tasks.find_by_status(status).await?)
    }

    async fn get_responsible(&self, id: TaskId) -> Result<Employee, OrganizerError> {
        let task = self.existing(id).await?;
        lookup_employee(self.employees.as_ref(), task.employee_id).await
    }

    async fn create_task(&self, draft: TaskDraft) -> Result<Task, OrganizerError> {
        let title = required(draft.title, Subject::Title)?;
        // A missing date is as old as it gets.
        let due_date = draft
            .due_date
            .ok_or(OrganizerError::Invalid(Rejection::DateBeforeToday))?;
        check_due_date(due_date, (self.today)())?;
        let employee_id = self.resolve_assignee(draft.employee_id).await?;

        let task = self
            .tasks
            .insert(&TaskData {
                title,
                description: draft.description,
                due_date,
                status: draft.status,
                employee_id,
            })
            .await?;
        tracing::info!(task_id = %task.id, "task created");
        self.record(&task).await?;

        Ok(task)
    }

    async fn update_task(&self, id: TaskId, draft: TaskDraft) -> Result<(), OrganizerError> {
        let mut task = self.existing(id).await?;

        let due_date = draft
            .due_date
            .ok_or(OrganizerError::Invalid(Rejection::DateBeforeMinimum))?;
        let title = required(draft.title, Subject::Title)?;
        check_due_date(due_date, (self.today)())?;
        let employee_id = self.resolve_assignee(draft.employee_id).await?;

        task.replace(TaskData {
            title,
            description: draft.description,
            due_date,
            status: draft.status,
            employee_id,
        });
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %id, "task replaced");
        self.record(&task).await
    }

    async fn update_title(&self, id: TaskId, title: Option<String>) -> Result<(), OrganizerError> {
        let mut task = self.existing(id).await?;

        task.title = required(title, Subject::Title)?;
        self.tasks.update(&task).await?;
        tracing::debug!(task_id = %id, "task title updated");

        Ok(())
    }

    async fn update_description(
        &self,
        id: TaskId,
        description: Option<String>,
    ) -> Result<(), OrganizerError> {
        let mut task = self.existing(id).await?;

        task.description = Some(present(description, Subject::Description)?);
        self.tasks.update(&task).await?;
        tracing::debug!(task_id = %id, "task description updated");

        Ok(())
    }

    async fn update_due_date(
        &self,
        id: TaskId,
        due_date: Option<Date>,
    ) -> Result<(), OrganizerError> {
        let mut task = self.existing(id).await?;
        let due_date = present(due_date, Subject::Date)?;
        check_due_date(due_date, (self.today)())?;

        task.due_date = due_date;
        self.tasks.update(&task).await?;
        tracing::debug!(task_id = %id, "task due date updated");

        Ok(())
    }

    async fn update_employee(
        &self,
        id: TaskId,
        employee_id: Option<EmployeeId>,
    ) -> Result<(), OrganizerError> {
        let mut task = self.existing(id).await?;
        let employee_id = present(employee_id, Subject::Employee)?;

        task.employee_id = self.resolve_assignee(employee_id).await?;
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %id, employee_id = %task.employee_id, "task reassigned");
        self.record(&task).await
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: Option<TaskStatus>,
    ) -> Result<(), OrganizerError> {
        let mut task = self.existing(id).await?;
        if !task.is_assigned() {
            return Err(OrganizerError::Invalid(Rejection::NotSelected(
                Subject::Employee,
            )));
        }
        let status = present(status, Subject::Status)?;

        task.status = status;
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %id, %status, "task status changed");
        self.record(&task).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), OrganizerError> {
        let task = self.existing(id).await?;

        self.record(&task).await?;
        self.tasks.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");

        Ok(())
    }
}
