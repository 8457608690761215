//! PostgreSQL implementation of the HistoryRepository port.

use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::domain::{
    models::{EmployeeId, HistoryEntry, HistoryEntryId, NewHistoryEntry, TaskId, TaskStatus},
    ports::outbound::HistoryRepository,
    OrganizerError,
};

pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: i32,
    tarefa_id: i32,
    funcionario_id: i32,
    status_tarefa: i32,
    data_registro: OffsetDateTime,
}

impl TryFrom<HistoryRow> for HistoryEntry {
    type Error = OrganizerError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(row.status_tarefa)
            .map_err(|e| OrganizerError::storage(e.to_string()))?;

        Ok(Self {
            id: HistoryEntryId::new(row.id),
            task_id: TaskId::new(row.tarefa_id),
            employee_id: EmployeeId::new(row.funcionario_id),
            status,
            recorded_at: row.data_registro,
        })
    }
}

#[async_trait]
impl HistoryRepository for PostgresHistoryRepository {
    async fn record(&self, entry: &NewHistoryEntry) -> Result<HistoryEntry, OrganizerError> {
        let row = sqlx::query_as::<_, HistoryRow>(
            r#"
            INSERT INTO historico_tarefas (tarefa_id, funcionario_id, status_tarefa, data_registro)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tarefa_id, funcionario_id, status_tarefa, data_registro
            "#,
        )
        .bind(entry.task_id.as_i32())
        .bind(entry.employee_id.as_i32())
        .bind(entry.status.ordinal())
        .bind(entry.recorded_at)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn for_task(&self, task_id: TaskId) -> Result<Vec<HistoryEntry>, OrganizerError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT id, tarefa_id, funcionario_id, status_tarefa, data_registro
            FROM historico_tarefas
            WHERE tarefa_id = $1
            ORDER BY id
            "#,
        )
        .bind(task_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(HistoryEntry::try_from).collect()
    }
}
