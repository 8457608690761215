use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{Employee, EmployeeData, EmployeeDraft, EmployeeId},
    ports::{inbound::EmployeeService, outbound::EmployeeRepository},
    validation::{check_phone, present, required},
    OrganizerError, Rejection, Subject,
};

/// Implementation of the EmployeeService inbound port.
pub struct EmployeeServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> EmployeeServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: EmployeeRepository> EmployeeServiceImpl<R> {
    async fn existing(&self, id: EmployeeId) -> Result<Employee, OrganizerError> {
        self.repository
            .get(id)
            .await?
            .ok_or(OrganizerError::not_found(Subject::Employee))
    }

    /// Names are unique by containment in either direction: "Ana" and
    /// "Ana Paula" cannot coexist. The record being edited is not excluded,
    /// so resubmitting an unchanged name is rejected too.
    async fn ensure_name_free(&self, name: &str) -> Result<(), OrganizerError> {
        if self.repository.name_taken(name).await? {
            return Err(OrganizerError::Invalid(Rejection::AlreadyExists(
                Subject::Name,
            )));
        }
        Ok(())
    }
}

/// Resolves an employee the way every lookup by id does.
///
/// Shared with the task service so that "who is responsible" answers exactly
/// like `GET /Funcionario/{id}`.
pub(crate) async fn lookup_employee<R: EmployeeRepository>(
    repository: &R,
    id: EmployeeId,
) -> Result<Employee, OrganizerError> {
    if !id.is_assigned() {
        return Err(OrganizerError::NotFound(Rejection::NotSelected(
            Subject::Employee,
        )));
    }

    repository
        .get(id)
        .await?
        .ok_or(OrganizerError::not_found(Subject::Employee))
}

fn none_registered<T>(found: Vec<T>) -> Result<Vec<T>, OrganizerError> {
    if found.is_empty() {
        Err(OrganizerError::NotFound(Rejection::NotRegistered(
            Subject::Employee,
        )))
    } else {
        Ok(found)
    }
}

#[async_trait]
impl<R: EmployeeRepository> EmployeeService for EmployeeServiceImpl<R> {
    async fn list_employees(&self) -> Result<Vec<Employee>, OrganizerError> {
        let employees = self.repository.list().await?;
        if employees.is_empty() {
            return Err(OrganizerError::not_found(Subject::Employee));
        }
        Ok(employees)
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, OrganizerError> {
        lookup_employee(self.repository.as_ref(), id).await
    }

    async fn find_by_name(&self, name: Option<String>) -> Result<Vec<Employee>, OrganizerError> {
        let name = present(name, Subject::Name)?;
        none_registered(self.repository.find_by_name_containing(&name).await?)
    }

    async fn find_by_email(
        &self,
        email: Option<String>,
    ) -> Result<Vec<Employee>, OrganizerError> {
        let email = present(email, Subject::Email)?;
        none_registered(self.repository.find_by_email_containing(&email).await?)
    }

    async fn find_by_phone(
        &self,
        phone: Option<String>,
    ) -> Result<Vec<Employee>, OrganizerError> {
        let phone = present(phone, Subject::Phone)?;
        none_registered(self.repository.find_by_phone_containing(&phone).await?)
    }

    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, OrganizerError> {
        let name = required(draft.name, Subject::Name)?;
        let email = required(draft.email, Subject::Email)?;
        let phone = required(draft.phone, Subject::Phone)?;
        self.ensure_name_free(&name).await?;
        check_phone(&phone)?;

        let employee = self
            .repository
            .insert(&EmployeeData { name, email, phone })
            .await?;
        tracing::info!(employee_id = %employee.id, "employee created");

        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<(), OrganizerError> {
        let mut employee = self.existing(id).await?;

        let name = required(draft.name, Subject::Name)?;
        self.ensure_name_free(&name).await?;
        let email = required(draft.email, Subject::Email)?;
        let phone = required(draft.phone, Subject::Phone)?;
        check_phone(&phone)?;

        employee.replace(EmployeeData { name, email, phone });
        self.repository.update(&employee).await?;
        tracing::info!(employee_id = %id, "employee replaced");

        Ok(())
    }

    async fn update_name(
        &self,
        id: EmployeeId,
        name: Option<String>,
    ) -> Result<(), OrganizerError> {
        let mut employee = self.existing(id).await?;
        let name = required(name, Subject::Name)?;
        self.ensure_name_free(&name).await?;

        employee.name = name;
        self.repository.update(&employee).await?;
        tracing::debug!(employee_id = %id, "employee name updated");

        Ok(())
    }

    async fn update_email(
        &self,
        id: EmployeeId,
        email: Option<String>,
    ) -> Result<(), OrganizerError> {
        let mut employee = self.existing(id).await?;

        employee.email = required(email, Subject::Email)?;
        self.repository.update(&employee).await?;
        tracing::debug!(employee_id = %id, "employee email updated");

        Ok(())
    }

    async fn update_phone(
        &self,
        id: EmployeeId,
        phone: Option<String>,
    ) -> Result<(), OrganizerError> {
        let mut employee = self.existing(id).await?;
        let phone = required(phone, Subject::Phone)?;
        check_phone(&phone)?;

        employee.phone = phone;
        self.repository.update(&employee).await?;
        tracing::debug!(employee_id = %id, "employee phone updated");

        Ok(())
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), OrganizerError> {
        self.existing(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(employee_id = %id, "employee deleted");

        Ok(())
    }
}
