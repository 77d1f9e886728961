//! Attendance records

use std::borrow::Cow;

use chrono::NaiveDate;
use chrono::NaiveTime;
use serde::Deserialize;
use serde::Serialize;
use staffdesk_table::SearchField;
use staffdesk_table::Searchable;
use uuid::Uuid;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    OnLeave,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::OnLeave => "On leave",
        }
    }

    /// Whether the employee showed up that day.
    pub fn attended(self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

/// One employee's attendance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out)
            && check_out < check_in
        {
            return Err(ModelError::CheckOutBeforeCheckIn {
                check_in,
                check_out,
            });
        }
        Ok(())
    }

    /// Hours between check-in and check-out, if both are recorded and ordered.
    pub fn hours_worked(&self) -> Option<f64> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        let minutes = (check_out - check_in).num_minutes();
        (minutes >= 0).then(|| minutes as f64 / 60.0)
    }
}

impl Searchable for AttendanceRecord {
    fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
        match field {
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
