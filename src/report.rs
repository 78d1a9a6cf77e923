//! Read-only views over the employee list: text summary, table rows and
//! chart series. Rendering is left to the GUI.

use thiserror::Error;

use crate::currency::{self, REFERENCE_CURRENCY, REFERENCE_SYMBOL};
use crate::models::EmployeeRecord;

pub const TABLE_HEADERS: [&str; 5] = ["No.", "Name", "Job Title", "Salary", "Employee ID"];
pub const CHART_TITLE: &str = "Employee Salaries by Name and Job Title";
pub const CHART_AXIS: &str = "Monthly Salary (USD)";

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub number: usize,
    pub name: String,
    pub position: String,
    pub salary: String,
    pub id: String,
}

impl TableRow {
    pub fn cells(&self) -> [String; 5] {
        [
            self.number.to_string(),
            self.name.clone(),
            self.position.clone(),
            self.salary.clone(),
            self.id.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Nothing to show. Informational, the caller reports it and carries on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NothingToDisplay {
    #[error("No employee data to display.")]
    NoEmployees,
    #[error("No valid salary data to plot.")]
    NoSalaries,
}

/// Which renderers this build ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub table: bool,
    pub chart: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        Capabilities {
            table: cfg!(feature = "table"),
            chart: cfg!(feature = "chart"),
        }
    }
}

pub fn describe(rec: &EmployeeRecord) -> String {
    let mut info = format!("Name: {}\nPosition: {}", rec.name, rec.position);
    match rec.salary() {
        Some(salary) => {
            let usd = currency::to_reference(salary.amount, salary.symbol);
            info.push_str(&format!(
                "\nSalary: {salary} (~{REFERENCE_SYMBOL}{usd:.2} {REFERENCE_CURRENCY})"
            ));
        }
        None => info.push_str("\nSalary: Not set yet."),
    }
    info
}

pub fn tabulate(records: &[EmployeeRecord]) -> Vec<TableRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| TableRow {
            number: i + 1,
            name: rec.name.clone(),
            position: rec.position.clone(),
            salary: rec
                .salary()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Not Set".to_string()),
            id: rec.id.clone(),
        })
        .collect()
}

pub fn chart_series(records: &[EmployeeRecord]) -> Vec<ChartPoint> {
    records
        .iter()
        .filter_map(|rec| {
            let salary = rec.salary()?;
            Some(ChartPoint {
                label: format!("{} ({})", rec.name, rec.position),
                value: currency::to_reference(salary.amount, salary.symbol),
            })
        })
        .collect()
}

/// Table rows, or the reason there is nothing to tabulate.
pub fn table_view(records: &[EmployeeRecord]) -> Result<Vec<TableRow>, NothingToDisplay> {
    if records.is_empty() {
        return Err(NothingToDisplay::NoEmployees);
    }
    Ok(tabulate(records))
}

/// Chart points, or the reason there is nothing to plot.
pub fn chart_view(records: &[EmployeeRecord]) -> Result<Vec<ChartPoint>, NothingToDisplay> {
    if records.is_empty() {
        return Err(NothingToDisplay::NoEmployees);
    }
    let series = chart_series(records);
    if series.is_empty() {
        return Err(NothingToDisplay::NoSalaries);
    }
    Ok(series)
}

/// Bar label format: `$12,345` (rounded, grouped by thousands).
pub fn format_reference(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, c) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{sign}{REFERENCE_SYMBOL}{grouped}")
}
