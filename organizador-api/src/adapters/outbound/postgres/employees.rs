//! PostgreSQL implementation of the EmployeeRepository port.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{Employee, EmployeeData, EmployeeId},
    ports::outbound::EmployeeRepository,
    OrganizerError,
};

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Employees whose `column` contains `needle`, case-sensitively.
    async fn containing(
        &self,
        column: Column,
        needle: &str,
    ) -> Result<Vec<Employee>, OrganizerError> {
        // strpos avoids treating `%` and `_` in user input as LIKE wildcards.
        let query = format!(
            r#"
            SELECT id, nome, email, telefone
            FROM funcionarios
            WHERE strpos({}, $1) > 0
            ORDER BY id
            "#,
            column.as_sql()
        );

        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(needle)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}

#[derive(Clone, Copy)]
enum Column {
    Name,
    Email,
    Phone,
}

impl Column {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Email => "email",
            Self::Phone => "telefone",
        }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i32,
    nome: String,
    email: String,
    telefone: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self::new(
            EmployeeId::new(row.id),
            EmployeeData {
                name: row.nome,
                email: row.email,
                phone: row.telefone,
            },
        )
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, OrganizerError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, nome, email, telefone
            FROM funcionarios
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>, OrganizerError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, nome, email, telefone
            FROM funcionarios
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Employee>, OrganizerError> {
        self.containing(Column::Name, name).await
    }

    async fn find_by_email_containing(
        &self,
        email: &str,
    ) -> Result<Vec<Employee>, OrganizerError> {
        self.containing(Column::Email, email).await
    }

    async fn find_by_phone_containing(
        &self,
        phone: &str,
    ) -> Result<Vec<Employee>, OrganizerError> {
        self.containing(Column::Phone, phone).await
    }

    async fn name_taken(&self, name: &str) -> Result<bool, OrganizerError> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM funcionarios
                WHERE strpos(nome, $1) > 0 OR strpos($1, nome) > 0
            )
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn insert(&self, employee: &EmployeeData) -> Result<Employee, OrganizerError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO funcionarios (nome, email, telefone)
            VALUES ($1, $2, $3)
            RETURNING id, nome, email, telefone
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, employee: &Employee) -> Result<(), OrganizerError> {
        sqlx::query(
            r#"
            UPDATE funcionarios
            SET nome = $2, email = $3, telefone = $4
            WHERE id = $1
            "#,
        )
        .bind(employee.id.as_i32())
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), OrganizerError> {
        sqlx::query(
            r#"
            DELETE FROM funcionarios
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
