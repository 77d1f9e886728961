//! Aggregates for the dashboard summary cards.

use serde::Serialize;

use crate::model::AttendanceRecord;
use crate::model::AttendanceStatus;
use crate::model::Employee;
use crate::model::EmploymentStatus;
use crate::model::LeaveRequest;
use crate::model::LeaveStatus;

/// Headcount card on the employees page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadcountSummary {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub terminated: usize,
}

impl HeadcountSummary {
    pub fn from_employees<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Self {
        employees
            .into_iter()
            .fold(Self::default(), |mut summary, employee| {
                summary.total += 1;
                match employee.status {
                    EmploymentStatus::Active => summary.active += 1,
                    EmploymentStatus::OnLeave => summary.on_leave += 1,
                    EmploymentStatus::Terminated => summary.terminated += 1,
                }
                summary
            })
    }
}

/// Leave cards: requests by status and total days requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total_days: i64,
    pub approved_days: i64,
}

impl LeaveSummary {
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a LeaveRequest>) -> Self {
        requests
            .into_iter()
            .fold(Self::default(), |mut summary, request| {
                let days = request.days();
                summary.total += 1;
                summary.total_days += days;
                match request.status {
                    LeaveStatus::Pending => summary.pending += 1,
                    LeaveStatus::Approved => {
                        summary.approved += 1;
                        summary.approved_days += days;
                    }
                    LeaveStatus::Rejected => summary.rejected += 1,
                }
                summary
            })
    }
}

/// Attendance cards: counts by status and the attendance rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub on_leave: usize,
    /// Share of records where the employee attended (present or late),
    /// as a percentage. Zero when there are no records.
    pub attendance_rate: f64,
}

impl AttendanceSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a AttendanceRecord>) -> Self {
        let mut summary = records
            .into_iter()
            .fold(Self::default(), |mut summary, record| {
                summary.total += 1;
                match record.status {
                    AttendanceStatus::Present => summary.present += 1,
                    AttendanceStatus::Absent => summary.absent += 1,
                    AttendanceStatus::Late => summary.late += 1,
                    AttendanceStatus::OnLeave => summary.on_leave += 1,
                }
                summary
            });

        if summary.total > 0 {
            let attended = (summary.present + summary.late) as f64;
            summary.attendance_rate = attended / summary.total as f64 * 100.0;
        }
        summary
    }
}
