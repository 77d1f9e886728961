//! Loads a page's records, applies the requested view and formats it.

use std::fs;
use std::path::Path;

use log::debug;
use log::info;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use staffdesk_lib::columns;
use staffdesk_lib::model::AttendanceRecord;
use staffdesk_lib::model::Department;
use staffdesk_lib::model::Employee;
use staffdesk_lib::model::LeaveRequest;
use staffdesk_lib::summary::AttendanceSummary;
use staffdesk_lib::summary::HeadcountSummary;
use staffdesk_lib::summary::LeaveSummary;
use staffdesk_table::Column;
use staffdesk_table::DataTable;
use staffdesk_table::Lookup;
use staffdesk_table::PageSize;
use staffdesk_table::Searchable;
use staffdesk_table::TableError;
use staffdesk_table::TableOptions;

use crate::args::Args;
use crate::args::Resource;
use crate::error::CliError;
use crate::render;
use crate::settings::Settings;

/// Runs one query and returns what should be printed.
pub fn run(args: &Args, settings: &Settings) -> Result<String, CliError> {
    let options = table_options(args, settings)?;
    debug!("running {:?} with {:?}", args.resource, options);

    match args.resource {
        Resource::Employees => {
            let employees: Vec<Employee> = load_records(&args.data)?;
            let departments: Vec<Department> = load_optional(args.departments.as_deref())?;
            let lookup = Lookup::from_records(&departments);
            let table = build(columns::employees(&departments), options, employees, lookup)?;
            present(table, args, |rows| HeadcountSummary::from_employees(rows))
        }
        Resource::Departments => {
            let departments: Vec<Department> = load_records(&args.data)?;
            let employees = load_employees(args)?;
            let lookup = Lookup::from_records(&employees);
            let table = build(columns::departments(&employees), options, departments, lookup)?;
            present(table, args, |rows| DepartmentSummary::new(&rows, &employees))
        }
        Resource::Leave => {
            let requests: Vec<LeaveRequest> = load_records(&args.data)?;
            let employees = load_employees(args)?;
            let lookup = Lookup::from_records(&employees);
            let table = build(columns::leave_requests(&employees), options, requests, lookup)?;
            present(table, args, |rows| LeaveSummary::from_requests(rows))
        }
        Resource::Attendance => {
            let records: Vec<AttendanceRecord> = load_records(&args.data)?;
            let employees = load_employees(args)?;
            let lookup = Lookup::from_records(&employees);
            let table = build(columns::attendance(&employees), options, records, lookup)?;
            present(table, args, |rows| AttendanceSummary::from_records(rows))
        }
    }
}

/// Departments card: how many departments match and how many employees
/// belong to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct DepartmentSummary {
    total: usize,
    with_manager: usize,
    headcount: usize,
}

impl DepartmentSummary {
    fn new(departments: &[&Department], employees: &[Employee]) -> Self {
        let headcount = employees
            .iter()
            .filter(|e| {
                e.department_id
                    .is_some_and(|id| departments.iter().any(|d| d.id == id))
            })
            .count();
        Self {
            total: departments.len(),
            with_manager: departments.iter().filter(|d| d.manager_id.is_some()).count(),
            headcount,
        }
    }
}

fn table_options(args: &Args, settings: &Settings) -> Result<TableOptions, TableError> {
    let page_size = match args.page_size {
        Some(size) => PageSize::try_from(size)?,
        None => settings.page_size()?,
    };
    let options = TableOptions::new().with_page_size(page_size);
    Ok(match &args.search_column {
        Some(key) => options.with_search_column(key.as_str()),
        None => options,
    })
}

fn build<T: Searchable>(
    columns: Vec<Column<T>>,
    options: TableOptions,
    records: Vec<T>,
    lookup: Lookup,
) -> Result<DataTable<T>, TableError> {
    Ok(DataTable::with_options(columns, options)?
        .with_records(records)
        .with_lookup(lookup))
}

/// Applies search, filters, sort and page in the order a user would.
fn apply<T: Searchable>(table: &mut DataTable<T>, args: &Args) -> Result<(), CliError> {
    if let Some(text) = &args.search {
        table.search(text.as_str());
    }

    for (key, text) in &args.filters {
        if !table.set_column_filter(key, text.as_str()) {
            return Err(match table.column(key) {
                Some(_) => TableError::NotFilterable(key.clone()),
                None => TableError::UnknownColumn(key.clone()),
            }
            .into());
        }
    }

    if let Some(spec) = &args.sort
        && !table.set_sort(&spec.key, Some(spec.direction))
    {
        return Err(match table.column(&spec.key) {
            Some(_) => CliError::NotSortable(spec.key.clone()),
            None => TableError::UnknownColumn(spec.key.clone()).into(),
        });
    }

    let requested = args.page.saturating_sub(1);
    table.set_page(requested);
    if table.current_page() != requested {
        warn!(
            "page {} is past the last page, showing page {}",
            args.page,
            table.current_page() + 1
        );
    }
    Ok(())
}

fn present<T, S, F>(mut table: DataTable<T>, args: &Args, summarize: F) -> Result<String, CliError>
where
    T: Searchable,
    S: Serialize,
    F: FnOnce(Vec<&T>) -> S,
{
    apply(&mut table, args)?;
    info!(
        "{} of {} records match, page {} of {}",
        table.row_count(),
        table.total_count(),
        table.current_page() + 1,
        table.page_count()
    );

    if args.summary {
        return Ok(to_json(&summarize(table.rows()))?);
    }
    if args.export {
        return Ok(to_json(&table.export().to_objects())?);
    }
    Ok(render::page(&table))
}

fn to_json<S: Serialize + ?Sized>(value: &S) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value).map(|json| json + "\n")
}

fn load_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<R> = serde_json::from_str(&contents).map_err(|source| CliError::Records {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn load_optional<R: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<R>, CliError> {
    path.map_or_else(|| Ok(Vec::new()), load_records)
}

fn load_employees(args: &Args) -> Result<Vec<Employee>, CliError> {
    if args.employees.is_none() {
        warn!("no --employees file given, employee names will be blank");
    }
    load_optional(args.employees.as_deref())
}
