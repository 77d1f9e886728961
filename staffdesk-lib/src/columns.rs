//! Column sets for each dashboard page.
//!
//! Columns that show a referenced record's name take the referenced array
//! up front and resolve ids through a name map captured by the accessor.
//! An id that does not resolve shows as an empty cell.

use std::collections::HashMap;
use std::sync::Arc;

use staffdesk_table::CellValue;
use staffdesk_table::Column;
use uuid::Uuid;

use crate::model::AttendanceRecord;
use crate::model::Department;
use crate::model::Employee;
use crate::model::LeaveRequest;

type NameMap = Arc<HashMap<Uuid, String>>;

fn employee_names(employees: &[Employee]) -> NameMap {
    Arc::new(employees.iter().map(|e| (e.id, e.full_name())).collect())
}

fn department_names(departments: &[Department]) -> NameMap {
    Arc::new(departments.iter().map(|d| (d.id, d.name.clone())).collect())
}

fn resolve(names: &NameMap, id: Option<Uuid>) -> CellValue {
    id.and_then(|id| names.get(&id)).into()
}

/// Employees page.
pub fn employees(departments: &[Department]) -> Vec<Column<Employee>> {
    let names = department_names(departments);
    vec![
        Column::new("name", "Name", |e: &Employee| e.full_name().into()),
        Column::new("email", "Email", |e: &Employee| e.email.as_str().into()),
        Column::new("position", "Position", |e: &Employee| {
            e.position.as_deref().into()
        }),
        Column::new("department", "Department", move |e: &Employee| {
            resolve(&names, e.department_id)
        }),
        Column::new("role", "Role", |e: &Employee| e.role.label().into()),
        Column::new("status", "Status", |e: &Employee| e.status.label().into()),
        Column::new("hiredOn", "Hired", |e: &Employee| e.hired_on.into()),
    ]
}

/// Departments page. `employees` feeds the manager and headcount columns.
pub fn departments(employees: &[Employee]) -> Vec<Column<Department>> {
    let managers = employee_names(employees);
    let mut headcounts: HashMap<Uuid, usize> = HashMap::new();
    for id in employees.iter().filter_map(|e| e.department_id) {
        *headcounts.entry(id).or_default() += 1;
    }
    let headcounts = Arc::new(headcounts);

    vec![
        Column::new("name", "Name", |d: &Department| d.name.as_str().into()),
        Column::new("description", "Description", |d: &Department| {
            d.description.as_deref().into()
        })
        .disable_sorting(),
        Column::new("manager", "Manager", move |d: &Department| {
            resolve(&managers, d.manager_id)
        }),
        Column::new("headcount", "Headcount", move |d: &Department| {
            headcounts.get(&d.id).copied().unwrap_or(0).into()
        }),
    ]
}

/// Leave requests page.
pub fn leave_requests(employees: &[Employee]) -> Vec<Column<LeaveRequest>> {
    let names = employee_names(employees);
    vec![
        Column::new("employee", "Employee", move |l: &LeaveRequest| {
            resolve(&names, Some(l.employee_id))
        }),
        Column::new("type", "Type", |l: &LeaveRequest| l.leave_type.label().into()),
        Column::new("startDate", "Start", |l: &LeaveRequest| l.start_date.into()),
        Column::new("endDate", "End", |l: &LeaveRequest| l.end_date.into()),
        Column::new("days", "Days", |l: &LeaveRequest| l.days().into()),
        Column::new("reason", "Reason", |l: &LeaveRequest| {
            l.reason.as_deref().into()
        })
        .disable_sorting(),
        Column::new("status", "Status", |l: &LeaveRequest| l.status.label().into()),
    ]
}

/// Attendance page.
pub fn attendance(employees: &[Employee]) -> Vec<Column<AttendanceRecord>> {
    let names = employee_names(employees);
    // Zero-padded, so text order is time order.
    let clock = |t: Option<chrono::NaiveTime>| -> CellValue {
        t.map(|t| t.format("%H:%M").to_string()).into()
    };

    vec![
        Column::new("employee", "Employee", move |a: &AttendanceRecord| {
            resolve(&names, Some(a.employee_id))
        }),
        Column::new("date", "Date", |a: &AttendanceRecord| a.date.into()),
        Column::new("status", "Status", |a: &AttendanceRecord| {
            a.status.label().into()
        }),
        Column::new("checkIn", "Check in", move |a: &AttendanceRecord| clock(a.check_in)),
        Column::new("checkOut", "Check out", move |a: &AttendanceRecord| {
            clock(a.check_out)
        }),
        Column::new("hours", "Hours", |a: &AttendanceRecord| a.hours_worked().into())
            .render(|v| match v {
                CellValue::Float(hours) => format!("{hours:.1}"),
                other => other.display().into_owned(),
            }),
    ]
}
