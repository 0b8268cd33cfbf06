use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use crate::errors::SpendlogError;
use crate::expenses::ExpenseRecord;

/// Seam between the operations and the backing file, so tests can swap in an
/// in-memory store. Every operation loads fresh and saves in full; the file
/// is the single source of truth.
pub trait ExpenseStore {
    fn load(&self) -> Result<Vec<ExpenseRecord>, SpendlogError>;
    fn save(&self, records: &[ExpenseRecord]) -> Result<(), SpendlogError>;
}

/// Whole-file JSON persistence. A missing file reads as an empty collection;
/// saving overwrites the file in its entirety.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ExpenseStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ExpenseRecord>, SpendlogError> {
        if !self.path.exists() {
            log::debug!("No expense file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)?;
        Ok(records)
    }

    fn save(&self, records: &[ExpenseRecord]) -> Result<(), SpendlogError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        log::debug!("Saved {} expenses to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
pub struct MemoryStore {
    records: std::cell::RefCell<Vec<ExpenseRecord>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records: std::cell::RefCell::new(records),
        }
    }
}

#[cfg(test)]
impl ExpenseStore for MemoryStore {
    fn load(&self) -> Result<Vec<ExpenseRecord>, SpendlogError> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[ExpenseRecord]) -> Result<(), SpendlogError> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
