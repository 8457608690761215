//! PostgreSQL implementation of the TaskRepository port.

use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;

use crate::domain::{
    models::{EmployeeId, Task, TaskData, TaskId, TaskStatus},
    ports::outbound::TaskRepository,
    OrganizerError,
};

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i32,
    titulo: String,
    descricao: Option<String>,
    data: Date,
    status: i32,
    funcionario_id: i32,
}

impl TryFrom<TaskRow> for Task {
    type Error = OrganizerError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status =
            TaskStatus::try_from(row.status).map_err(|e| OrganizerError::storage(e.to_string()))?;

        Ok(Self::new(
            TaskId::new(row.id),
            TaskData {
                title: row.titulo,
                description: row.descricao,
                due_date: row.data,
                status,
                employee_id: EmployeeId::new(row.funcionario_id),
            },
        ))
    }
}

fn into_tasks(rows: Vec<TaskRow>) -> Result<Vec<Task>, OrganizerError> {
    rows.into_iter().map(Task::try_from).collect()
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, OrganizerError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, titulo, descricao, data, status, funcionario_id
            FROM tarefas
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        into_tasks(rows)
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, OrganizerError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, titulo, descricao, data, status, funcionario_id
            FROM tarefas
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Task::try_from).transpose()
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Task>, OrganizerError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, titulo, descricao, data, status, funcionario_id
            FROM tarefas
            WHERE strpos(titulo, $1) > 0
            ORDER BY id
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        into_tasks(rows)
    }

    async fn find_by_due_date(&self, due_date: Date) -> Result<Vec<Task>, OrganizerError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, titulo, descricao, data, status, funcionario_id
            FROM tarefas
            WHERE data = $1
            ORDER BY id
            "#,
        )
        .bind(due_date)
        .fetch_all(&self.pool)
        .await?;

        into_tasks(rows)
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, OrganizerError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, titulo, descricao, data, status, funcionario_id
            FROM tarefas
            WHERE status = $1
            ORDER BY id
            "#,
        )
        .bind(status.ordinal())
        .fetch_all(&self.pool)
        .await?;

        into_tasks(rows)
    }

    async fn insert(&self, task: &TaskData) -> Result<Task, OrganizerError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tarefas (titulo, descricao, data, status, funcionario_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, titulo, descricao, data, status, funcionario_id
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.status.ordinal())
        .bind(task.employee_id.as_i32())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn update(&self, task: &Task) -> Result<(), OrganizerError> {
        sqlx::query(
            r#"
            UPDATE tarefas
            SET titulo = $2, descricao = $3, data = $4, status = $5, funcionario_id = $6
            WHERE id = $1
            "#,
        )
        .bind(task.id.as_i32())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.status.ordinal())
        .bind(task.employee_id.as_i32())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), OrganizerError> {
        sqlx::query(
            r#"
            DELETE FROM tarefas
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
