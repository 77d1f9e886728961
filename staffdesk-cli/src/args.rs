//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use staffdesk_table::SortSpec;

/// Dashboard page to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Employees,
    Departments,
    Leave,
    Attendance,
}

/// Search, sort and page HR records from JSON exports.
#[derive(Debug, Parser)]
#[command(name = "staffdesk", version, about)]
pub struct Args {
    /// Which page to show
    #[arg(value_enum)]
    pub resource: Resource,

    /// JSON array of records for the page
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Employees JSON, used to resolve names and headcounts on the other pages
    #[arg(long, value_name = "FILE")]
    pub employees: Option<PathBuf>,

    /// Departments JSON, used for the department column on the employees page
    #[arg(long, value_name = "FILE")]
    pub departments: Option<PathBuf>,

    /// Search box text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Search one column instead of every searchable field
    #[arg(long, value_name = "KEY")]
    pub search_column: Option<String>,

    /// Column filter, repeatable
    #[arg(short, long = "filter", value_name = "KEY=TEXT", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Sort column with optional direction
    #[arg(long, value_name = "KEY[:asc|:desc]")]
    pub sort: Option<SortSpec>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page: 5, 10, 20 or 50
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Print every matching row as JSON instead of one page
    #[arg(long, conflicts_with = "summary")]
    pub export: bool,

    /// Print the summary cards for the matching rows as JSON
    #[arg(long)]
    pub summary: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    let (key, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=TEXT, got {s:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing column key in {s:?}"));
    }
    Ok((key.to_string(), text.to_string()))
}
