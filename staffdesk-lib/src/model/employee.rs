//! Employee records

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use staffdesk_table::SearchField;
use staffdesk_table::Searchable;
use uuid::Uuid;

/// Permission role assigned to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Employee,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}

/// Employment status shown in the employees table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

impl EmploymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::OnLeave => "On leave",
            EmploymentStatus::Terminated => "Terminated",
        }
    }
}

/// An employee as returned by the backend.
///
/// # Example
///
/// ```
/// use staffdesk_lib::model::Employee;
///
/// let employee: Employee = serde_json::from_str(r#"{
///     "id": "6f1d2a4e-5b0c-4d8e-9a3f-1c2b3d4e5f60",
///     "firstName": "Ann",
///     "lastName": "Lee",
///     "email": "ann@example.com"
/// }"#).unwrap();
///
/// assert_eq!(employee.full_name(), "Ann Lee");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department_id: Option<Uuid>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: EmploymentStatus,
    #[serde(default)]
    pub hired_on: Option<NaiveDate>,
}

impl Employee {
    /// Creates an active employee with a fresh id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            username: None,
            position: None,
            department_id: None,
            role: Role::default(),
            status: EmploymentStatus::default(),
            hired_on: None,
        }
    }

    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Searchable for Employee {
    fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
        match field {
            SearchField::FirstName => Some(Cow::Borrowed(&self.first_name)),
            SearchField::LastName => Some(Cow::Borrowed(&self.last_name)),
            SearchField::Email => Some(Cow::Borrowed(&self.email)),
            SearchField::Username => self.username.as_deref().map(Cow::Borrowed),
            SearchField::Position => self.position.as_deref().map(Cow::Borrowed),
            SearchField::Status => Some(Cow::Borrowed(self.status.label())),
            _ => None,
        }
    }

    fn record_id(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.id.to_string()))
    }

    /// Searching employees also matches their department's name.
    fn foreign_id(&self) -> Option<Cow<'_, str>> {
        self.department_id.map(|id| Cow::Owned(id.to_string()))
    }
}
