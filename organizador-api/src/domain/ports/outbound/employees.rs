//! Employee repository port (outbound).

use async_trait::async_trait;

use crate::domain::{
    models::{Employee, EmployeeData, EmployeeId},
    OrganizerError,
};

/// Outbound port for employee persistence.
///
/// Substring lookups are case-sensitive and match anywhere in the field.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// All employees, ordered by id.
    async fn list(&self) -> Result<Vec<Employee>, OrganizerError>;

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>, OrganizerError>;

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Employee>, OrganizerError>;

    async fn find_by_email_containing(&self, email: &str)
        -> Result<Vec<Employee>, OrganizerError>;

    async fn find_by_phone_containing(&self, phone: &str)
        -> Result<Vec<Employee>, OrganizerError>;

    /// Whether any stored name contains `name` or is contained in it.
    async fn name_taken(&self, name: &str) -> Result<bool, OrganizerError>;

    /// Stores a new employee and returns it with its assigned id.
    async fn insert(&self, employee: &EmployeeData) -> Result<Employee, OrganizerError>;

    /// Overwrites the stored row with the same id.
    async fn update(&self, employee: &Employee) -> Result<(), OrganizerError>;

    async fn delete(&self, id: EmployeeId) -> Result<(), OrganizerError>;
}
