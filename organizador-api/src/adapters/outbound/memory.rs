//! In-memory implementation of every repository port, for tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use time::Date;

use crate::domain::{
    models::{
        Employee, EmployeeData, EmployeeId, HistoryEntry, HistoryEntryId, NewHistoryEntry, Task,
        TaskData, TaskId, TaskStatus,
    },
    ports::outbound::{EmployeeRepository, HistoryRepository, TaskRepository},
    OrganizerError,
};

#[derive(Default)]
struct Tables {
    employees: BTreeMap<i32, Employee>,
    tasks: BTreeMap<i32, Task>,
    history: Vec<HistoryEntry>,
    last_employee_id: i32,
    last_task_id: i32,
}

/// Shared tables behind all three ports. Clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

#[allow(dead_code)]
impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded history entry, for test assertions.
    pub fn all_history(&self) -> Vec<HistoryEntry> {
        self.tables.read().unwrap().history.clone()
    }

    pub fn employee_count(&self) -> usize {
        self.tables.read().unwrap().employees.len()
    }

    pub fn task_count(&self) -> usize {
        self.tables.read().unwrap().tasks.len()
    }

    fn employees_where(&self, predicate: impl Fn(&Employee) -> bool) -> Vec<Employee> {
        let tables = self.tables.read().unwrap();
        tables
            .employees
            .values()
            .filter(|employee| predicate(employee))
            .cloned()
            .collect()
    }

    fn tasks_where(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        let tables = self.tables.read().unwrap();
        tables
            .tasks
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Employee>, OrganizerError> {
        Ok(self.employees_where(|_| true))
    }

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>, OrganizerError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.employees.get(&id.as_i32()).cloned())
    }

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Employee>, OrganizerError> {
        Ok(self.employees_where(|employee| employee.name.contains(name)))
    }

    async fn find_by_email_containing(
        &self,
        email: &str,
    ) -> Result<Vec<Employee>, OrganizerError> {
        Ok(self.employees_where(|employee| employee.email.contains(email)))
    }

    async fn find_by_phone_containing(
        &self,
        phone: &str,
    ) -> Result<Vec<Employee>, OrganizerError> {
        Ok(self.employees_where(|employee| employee.phone.contains(phone)))
    }

    async fn name_taken(&self, name: &str) -> Result<bool, OrganizerError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .employees
            .values()
            .any(|employee| employee.name.contains(name) || name.contains(&employee.name)))
    }

    async fn insert(&self, employee: &EmployeeData) -> Result<Employee, OrganizerError> {
        let mut tables = self.tables.write().unwrap();
        tables.last_employee_id += 1;
        let id = EmployeeId::new(tables.last_employee_id);
        let stored = Employee::new(id, employee.clone());
        tables.employees.insert(id.as_i32(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, employee: &Employee) -> Result<(), OrganizerError> {
        let mut tables = self.tables.write().unwrap();
        tables
            .employees
            .insert(employee.id.as_i32(), employee.clone());
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), OrganizerError> {
        self.tables.write().unwrap().employees.remove(&id.as_i32());
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Task>, OrganizerError> {
        Ok(self.tasks_where(|_| true))
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, OrganizerError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.tasks.get(&id.as_i32()).cloned())
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Task>, OrganizerError> {
        Ok(self.tasks_where(|task| task.title.contains(title)))
    }

    async fn find_by_due_date(&self, due_date: Date) -> Result<Vec<Task>, OrganizerError> {
        Ok(self.tasks_where(|task| task.due_date == due_date))
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, OrganizerError> {
        Ok(self.tasks_where(|task| task.status == status))
    }

    async fn insert(&self, task: &TaskData) -> Result<Task, OrganizerError> {
        let mut tables = self.tables.write().unwrap();
        tables.last_task_id += 1;
        let id = TaskId::new(tables.last_task_id);
        let stored = Task::new(id, task.clone());
        tables.tasks.insert(id.as_i32(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> Result<(), OrganizerError> {
        let mut tables = self.tables.write().unwrap();
        tables.tasks.insert(task.id.as_i32(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), OrganizerError> {
        self.tables.write().unwrap().tasks.remove(&id.as_i32());
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for InMemoryStore {
    async fn record(&self, entry: &NewHistoryEntry) -> Result<HistoryEntry, OrganizerError> {
        let mut tables = self.tables.write().unwrap();
        let id = HistoryEntryId::new(tables.history.len() as i32 + 1);
        let stored = HistoryEntry {
            id,
            task_id: entry.task_id,
            employee_id: entry.employee_id,
            status: entry.status,
            recorded_at: entry.recorded_at,
        };
        tables.history.push(stored.clone());
        Ok(stored)
    }

    async fn for_task(&self, task_id: TaskId) -> Result<Vec<HistoryEntry>, OrganizerError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .history
            .iter()
            .filter(|entry| entry.task_id == task_id)
            .cloned()
            .collect())
    }
}
