use rust_decimal::Decimal;

use super::ExpenseRecord;

/// Total spend per category, in the order each category first appears.
/// Grouping is by the exact stored string (records are already capitalized
/// on creation, so "food" and "Food" never coexist in a well-formed file).
pub fn category_totals(records: &[ExpenseRecord]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(cat, _)| *cat == record.category) {
            Some((_, total)) => *total += record.amount,
            None => totals.push((record.category.clone(), record.amount)),
        }
    }
    totals
}

/// Records whose date string starts with `month` (expected `YYYY-MM`), plus
/// their total. The match is textual, not calendar-aware: "2024-1" also
/// matches "2024-10" through "2024-12".
pub fn in_month<'a>(records: &'a [ExpenseRecord], month: &str) -> (Vec<&'a ExpenseRecord>, Decimal) {
    let matches: Vec<&ExpenseRecord> = records
        .iter()
        .filter(|record| record.date.to_string().starts_with(month))
        .collect();
    let total = matches.iter().map(|record| record.amount).sum();
    (matches, total)
}
