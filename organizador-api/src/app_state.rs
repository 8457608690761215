use std::sync::Arc;

use crate::domain::ports::inbound::{EmployeeService, HistoryService, TaskService};

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
    pub task_service: Arc<dyn TaskService>,
    pub history_service: Arc<dyn HistoryService>,
}

impl AppState {
    pub fn new(
        employee_service: Arc<dyn EmployeeService>,
        task_service: Arc<dyn TaskService>,
        history_service: Arc<dyn HistoryService>,
    ) -> Self {
        Self {
            employee_service,
            task_service,
            history_service,
        }
    }
}
