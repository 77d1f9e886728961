//! Leave requests

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use staffdesk_table::SearchField;
use staffdesk_table::Searchable;
use uuid::Uuid;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Parental,
    Unpaid,
}

impl LeaveType {
    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Sick => "Sick",
            LeaveType::Personal => "Personal",
            LeaveType::Parental => "Parental",
            LeaveType::Unpaid => "Unpaid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

/// A leave request filed by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: LeaveStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LeaveRequest {
    /// Creates a pending request, rejecting ranges that end before they start.
    pub fn new(
        employee_id: Uuid,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ModelError> {
        let request = Self {
            id: Uuid::new_v4(),
            employee_id,
            leave_type,
            reason: None,
            status: LeaveStatus::default(),
            start_date,
            end_date,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.end_date < self.start_date {
            return Err(ModelError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Calendar days covered, both ends inclusive. Zero for inverted ranges.
    pub fn days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

impl Searchable for LeaveRequest {
    fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
        match field {
            SearchField::Type => Some(Cow::Borrowed(self.leave_type.label())),
            SearchField::Reason => self.reason.as_deref().map(Cow::Borrowed),
            SearchField::Status => Some(Cow::Borrowed(self.status.label())),
            _ => None,
        }
    }

    fn record_id(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.id.to_string()))
    }

    fn foreign_id(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.employee_id.to_string()))
    }
}
