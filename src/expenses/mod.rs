use std::fmt::Display;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::SpendlogError;

pub mod summary;

/// One logged transaction. The whole collection is persisted as a JSON array
/// of these, so field names and types are the file format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub amount: Decimal,
    pub category: String,
    pub note: String,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Builds a record stamped with today's date. The amount must be positive
    /// and the category non-empty; the category is stored capitalized.
    pub fn new(amount: Decimal, category: &str, note: String) -> Result<Self, SpendlogError> {
        if amount <= Decimal::ZERO {
            return Err(SpendlogError::Validation(format!(
                "Amount must be positive, got {amount}"
            )));
        }
        let category = capitalize(category);
        if category.is_empty() {
            return Err(SpendlogError::Validation(
                "Category must not be empty".to_string(),
            ));
        }
        Ok(Self {
            amount,
            category,
            note,
            date: Local::now().date_naive(),
        })
    }
}

impl Display for ExpenseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:8.2} | {} | {} | {}",
            self.amount, self.category, self.note, self.date
        )
    }
}

/// First character uppercased, the rest lowercased, so "food", "FOOD" and
/// "Food" all group under "Food".
fn capitalize(s: &str) -> String {
    let s = s.trim();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
