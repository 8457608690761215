use async_trait::async_trait;

use crate::domain::{
    models::{Employee, EmployeeDraft, EmployeeId},
    OrganizerError,
};

/// Inbound port for employee use cases.
///
/// Optional arguments mirror optional query parameters: `None` means the
/// client did not send the value, which the service rejects as null.
#[async_trait]
pub trait EmployeeService: Send + Sync + 'static {
    async fn list_employees(&self) -> Result<Vec<Employee>, OrganizerError>;

    /// Id `0` is reported as "not selected" rather than "not found".
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, OrganizerError>;

    async fn find_by_name(&self, name: Option<String>) -> Result<Vec<Employee>, OrganizerError>;

    async fn find_by_email(&self, email: Option<String>)
        -> Result<Vec<Employee>, OrganizerError>;

    async fn find_by_phone(&self, phone: Option<String>)
        -> Result<Vec<Employee>, OrganizerError>;

    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, OrganizerError>;

    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<(), OrganizerError>;

    async fn update_name(&self, id: EmployeeId, name: Option<String>)
        -> Result<(), OrganizerError>;

    async fn update_email(
        &self,
        id: EmployeeId,
        email: Option<String>,
    ) -> Result<(), OrganizerError>;

    async fn update_phone(
        &self,
        id: EmployeeId,
        phone: Option<String>,
    ) -> Result<(), OrganizerError>;

    /// Removes the employee. Tasks pointing at it keep the dangling id.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), OrganizerError>;
}
