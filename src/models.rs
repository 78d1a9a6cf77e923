use serde::{Serialize, Deserialize};
use std::fmt;

/// One employee as persisted in the data file.
///
/// `salary` and `symbol` are written as separate nullable keys to keep the
/// file format flat; use [`EmployeeRecord::salary`] to read them as a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub position: String,
    salary: Option<f64>,
    symbol: Option<String>,
}

/// A salary amount together with the currency symbol it was entered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salary<'a> {
    pub amount: f64,
    pub symbol: &'a str,
}

impl EmployeeRecord {
    pub fn new(id: String, name: String, position: String) -> Self {
        EmployeeRecord { id, name, position, salary: None, symbol: None }
    }

    /// Both halves must be present for the salary to count as set.
    pub fn salary(&self) -> Option<Salary<'_>> {
        match (self.salary, self.symbol.as_deref()) {
            (Some(amount), Some(symbol)) => Some(Salary { amount, symbol }),
            _ => None,
        }
    }

    pub fn set_salary(&mut self, amount: f64, symbol: &str) {
        self.salary = Some(amount);
        self.symbol = Some(symbol.to_string());
    }
}

impl fmt::Display for Salary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.symbol)
    }
}

/// Which text field a validation message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Position,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Position => "Job Title",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Requested salary change: raw user text, validated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryUpdate {
    pub symbol: String,
    pub amount_text: String,
}

/// Field changes for an existing employee. Blank strings mean "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeEdit {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<SalaryUpdate>,
}
