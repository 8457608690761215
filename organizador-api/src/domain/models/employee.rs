use super::EmployeeId;

/// A stored employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Employee {
    pub fn new(id: EmployeeId, data: EmployeeData) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
        }
    }

    /// Overwrites every editable field.
    pub fn replace(&mut self, data: EmployeeData) {
        self.name = data.name;
        self.email = data.email;
        self.phone = data.phone;
    }
}

/// Employee fields as sent by a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Validated employee fields, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeData {
    pub name: String,
    pub email: String,
    pub phone: String,
}
