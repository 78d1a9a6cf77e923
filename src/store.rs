use crate::currency;
use crate::errors::{Result, StoreError, ValidationError};
use crate::models::{EmployeeEdit, EmployeeRecord, Field, SalaryUpdate};
use crate::storage::DataFile;
use crate::utils;

/// In-memory employee list backed by a [`DataFile`].
///
/// Every mutating operation validates its input completely, applies the
/// change, then saves the whole list. If the save fails the change is
/// undone so the list never drifts from what is on disk.
pub struct EmployeeStore {
    records: Vec<EmployeeRecord>,
    file: DataFile,
}

impl EmployeeStore {
    /// Opens the store, falling back to an empty list if the file is
    /// missing or unreadable.
    pub fn open(file: DataFile) -> Self {
        let records = file.load_all();
        tracing::info!(path = %file.path().display(), count = records.len(), "employee data loaded");
        EmployeeStore { records, file }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the full list to disk.
    pub fn save(&self) -> Result<()> {
        self.file.save_all(&self.records).map_err(|e| {
            let reason = format!("{e:#}");
            tracing::error!(path = %self.file.path().display(), error = %reason, "save failed");
            StoreError::Persistence(e)
        })
    }

    pub fn find_by_id(&self, id: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Like [`find_by_id`](Self::find_by_id) but reports a missing id as an error.
    pub fn search(&self, id: &str) -> Result<&EmployeeRecord> {
        self.find_by_id(id)
            .ok_or_else(|| StoreError::EmployeeNotFound(id.to_string()))
    }

    pub fn register(&mut self, id: &str, name: &str, position: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        validate_text(Field::Name, name)?;
        validate_text(Field::Position, position)?;
        if self.find_by_id(id).is_some() {
            return Err(StoreError::DuplicateId(id.to_string()));
        }

        self.records.push(EmployeeRecord::new(id.to_string(), name.to_string(), position.to_string()));
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        tracing::info!(id, "employee registered");
        Ok(())
    }

    pub fn set_salary(&mut self, id: &str, symbol: &str, amount_text: &str) -> Result<()> {
        let idx = self.index_of(id)?;
        let (amount, symbol) = validate_salary(symbol, amount_text)?;
        self.apply(idx, |rec| rec.set_salary(amount, symbol))?;
        tracing::info!(id, symbol, amount, "salary recorded");
        Ok(())
    }

    /// Updates name, position and optionally salary in one step.
    ///
    /// Blank name or position means "keep the current value". A non-blank
    /// value must pass the same checks as at registration.
    pub fn edit(&mut self, id: &str, edit: &EmployeeEdit) -> Result<()> {
        let idx = self.index_of(id)?;
        let name = edit.name.as_deref().and_then(utils::non_blank);
        let position = edit.position.as_deref().and_then(utils::non_blank);
        if let Some(name) = name {
            validate_text(Field::Name, name)?;
        }
        if let Some(position) = position {
            validate_text(Field::Position, position)?;
        }
        let salary = edit
            .salary
            .as_ref()
            .map(|SalaryUpdate { symbol, amount_text }| validate_salary(symbol, amount_text))
            .transpose()?;

        self.apply(idx, |rec| {
            if let Some(name) = name {
                rec.name = name.to_string();
            }
            if let Some(position) = position {
                rec.position = position.to_string();
            }
            if let Some((amount, symbol)) = salary {
                rec.set_salary(amount, symbol);
            }
        })?;
        tracing::info!(id, salary_changed = salary.is_some(), "employee updated");
        Ok(())
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::EmployeeNotFound(id.to_string()))
    }

    /// Mutates one record and persists, restoring the old value on failure.
    fn apply(&mut self, idx: usize, change: impl FnOnce(&mut EmployeeRecord)) -> Result<()> {
        let before = self.records[idx].clone();
        change(&mut self.records[idx]);
        if let Err(e) = self.save() {
            self.records[idx] = before;
            return Err(e);
        }
        Ok(())
    }
}

fn validate_text(field: Field, value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    if !utils::is_letters_and_spaces(value) {
        return Err(ValidationError::NotAlphabetic(field));
    }
    Ok(())
}

fn validate_salary<'a>(symbol: &'a str, amount_text: &str) -> Result<(f64, &'a str)> {
    let symbol = symbol.trim();
    if !currency::is_supported(symbol) {
        return Err(StoreError::UnsupportedCurrency(symbol.to_string()));
    }
    let amount = utils::parse_amount(amount_text)
        .filter(|a| currency::to_reference(*a, symbol).is_finite())
        .ok_or_else(|| StoreError::InvalidAmount(amount_text.to_string()))?;
    Ok((amount, symbol))
}
