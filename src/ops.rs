use inquire::{required, CustomType, Text};
use rust_decimal::Decimal;

use crate::config::SpendlogConfig;
use crate::errors::SpendlogError;
use crate::expenses::ExpenseRecord;
use crate::store::ExpenseStore;

/// The user-supplied part of an expense; the date is stamped on add.
#[derive(Debug)]
pub struct NewExpense {
    pub amount: Decimal,
    pub category: String,
    pub note: String,
}

impl NewExpense {
    pub fn prompt(config: &SpendlogConfig) -> Result<Self, SpendlogError> {
        let amount = money_amount(config, "Amount:")?;
        let category = Text::new("Category:")
            .with_validator(required!("Require non-empty category"))
            .with_help_message("Food, Travel, Shopping, ...")
            .prompt()?;
        let note = Text::new("Note:").prompt()?;
        Ok(Self {
            amount,
            category,
            note,
        })
    }
}

pub fn money_amount(config: &SpendlogConfig, name: &str) -> Result<Decimal, SpendlogError> {
    let amount = CustomType::new(name)
        .with_formatter(&|decimal: Decimal| format!("{:.2}{}", decimal, config.currency))
        .with_error_message("Please type a valid number")
        .with_help_message("Type the amount using a decimal point as a separator")
        .prompt()?;
    Ok(amount)
}

/// Validates and appends a new expense, persisting the grown collection.
/// Indices of prior records are unchanged. Nothing is written on a
/// validation failure.
pub fn add(store: &dyn ExpenseStore, new: NewExpense) -> Result<ExpenseRecord, SpendlogError> {
    let record = ExpenseRecord::new(new.amount, &new.category, new.note)?;
    let mut records = store.load()?;
    records.push(record.clone());
    store.save(&records)?;
    Ok(record)
}

/// Removes the expense at a 1-based position and persists the shortened
/// collection, returning the removed record. Out-of-range positions fail
/// without touching the store.
pub fn delete(store: &dyn ExpenseStore, position: usize) -> Result<ExpenseRecord, SpendlogError> {
    let mut records = store.load()?;
    if position == 0 || position > records.len() {
        return Err(SpendlogError::NoSuchExpense(position));
    }
    let removed = records.remove(position - 1);
    store.save(&records)?;
    Ok(removed)
}

/// All expenses in stored order. Positions shown to the user are 1-based.
pub fn list(store: &dyn ExpenseStore) -> Result<Vec<ExpenseRecord>, SpendlogError> {
    store.load()
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};

    use crate::store::MemoryStore;

    use super::*;

    fn record(amount: i64, category: &str, date: &str) -> ExpenseRecord {
        ExpenseRecord {
            amount: Decimal::new(amount, 2),
            category: category.to_string(),
            note: String::new(),
            date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    #[test]
    fn add_appends_a_normalized_record_with_todays_date() {
        let store = MemoryStore::new(vec![record(100, "Travel", "2024-05-01")]);
        let new = NewExpense {
            amount: Decimal::new(1250, 2),
            category: "food".to_string(),
            note: "lunch".to_string(),
        };
        let added = add(&store, new).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record(100, "Travel", "2024-05-01"));
        assert_eq!(records[1], added);
        assert_eq!(added.amount, Decimal::new(1250, 2));
        assert_eq!(added.category, "Food");
        assert_eq!(added.note, "lunch");
        assert_eq!(added.date, Local::now().date_naive());
    }

    #[test]
    fn add_with_bad_amount_does_not_persist() {
        let store = MemoryStore::new(Vec::new());
        let new = NewExpense {
            amount: Decimal::new(-1, 0),
            category: "food".to_string(),
            note: String::new(),
        };
        assert!(matches!(
            add(&store, new),
            Err(SpendlogError::Validation(_))
        ));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_only_the_given_position() {
        let store = MemoryStore::new(vec![
            record(100, "Food", "2024-05-01"),
            record(200, "Travel", "2024-05-02"),
            record(300, "Food", "2024-05-03"),
        ]);
        let removed = delete(&store, 2).unwrap();
        assert_eq!(removed, record(200, "Travel", "2024-05-02"));

        let records = store.load().unwrap();
        assert_eq!(
            records,
            vec![
                record(100, "Food", "2024-05-01"),
                record(300, "Food", "2024-05-03"),
            ]
        );
    }

    #[test]
    fn delete_out_of_range_changes_nothing() {
        let initial = vec![record(100, "Food", "2024-05-01")];
        let store = MemoryStore::new(initial.clone());
        for position in [0, 2, 99] {
            assert!(matches!(
                delete(&store, position),
                Err(SpendlogError::NoSuchExpense(p)) if p == position
            ));
        }
        assert_eq!(store.load().unwrap(), initial);
    }

    #[test]
    fn add_then_delete_round_trips_to_empty() {
        let store = MemoryStore::new(Vec::new());
        let new = NewExpense {
            amount: Decimal::new(1250, 2),
            category: "food".to_string(),
            note: "lunch".to_string(),
        };
        add(&store, new).unwrap();
        assert_eq!(list(&store).unwrap().len(), 1);
        delete(&store, 1).unwrap();
        assert!(list(&store).unwrap().is_empty());
    }
}
