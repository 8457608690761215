//! Composition root: the only place that wires concrete outbound adapters
//! into the domain services.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::postgres::{
        PostgresEmployeeRepository, PostgresHistoryRepository, PostgresTaskRepository,
    },
    app_state::AppState,
    domain::services::{EmployeeServiceImpl, HistoryServiceImpl, TaskServiceImpl},
};

/// Builds the application state on top of PostgreSQL repositories.
pub fn postgres_state(pool: PgPool) -> AppState {
    let employees = Arc::new(PostgresEmployeeRepository::new(pool.clone()));
    let tasks = Arc::new(PostgresTaskRepository::new(pool.clone()));
    let history = Arc::new(PostgresHistoryRepository::new(pool));

    AppState::new(
        Arc::new(EmployeeServiceImpl::new(employees.clone())),
        Arc::new(TaskServiceImpl::new(tasks, employees, history.clone())),
        Arc::new(HistoryServiceImpl::new(history)),
    )
}

/// Builds the application state on a shared in-memory store.
#[cfg(test)]
pub fn in_memory_state(store: crate::adapters::outbound::memory::InMemoryStore) -> AppState {
    let store = Arc::new(store);

    AppState::new(
        Arc::new(EmployeeServiceImpl::new(store.clone())),
        Arc::new(TaskServiceImpl::new(
            store.clone(),
            store.clone(),
            store.clone(),
        )),
        Arc::new(HistoryServiceImpl::new(store)),
    )
}
