use std::fmt::Display;

use inquire::{CustomType, InquireError, Select, Text};

use self::config::{parse_config, SpendlogConfig};
use self::errors::SpendlogError;
use self::expenses::summary;
use self::store::{ExpenseStore, JsonFileStore};

pub mod config;
pub mod errors;
mod expenses;
mod ops;
mod store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Add,
    ViewAll,
    CategorySummary,
    MonthlySummary,
    Delete,
    Exit,
}

impl Command {
    fn options() -> Vec<Command> {
        vec![
            Command::Add,
            Command::ViewAll,
            Command::CategorySummary,
            Command::MonthlySummary,
            Command::Delete,
            Command::Exit,
        ]
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Add => "Add expense",
            Command::ViewAll => "View all expenses",
            Command::CategorySummary => "Category summary",
            Command::MonthlySummary => "Monthly summary",
            Command::Delete => "Delete an expense",
            Command::Exit => "Exit",
        };
        write!(f, "{name}")
    }
}

fn main() -> Result<(), SpendlogError> {
    env_logger::init();
    let config = parse_config()?;
    let store = JsonFileStore::new(config.data_file.clone());
    log::debug!("Using expense file {}", config.data_file.display());

    loop {
        println!();
        let choice = Select::new("What would you like to do?", Command::options()).prompt();
        let command = match choice {
            Ok(Command::Exit) | Err(InquireError::OperationCanceled) => break,
            Ok(command) => command,
            Err(err) => return Err(err.into()),
        };
        match run(command, &config, &store) {
            Ok(()) => {}
            Err(SpendlogError::Prompt(InquireError::OperationCanceled)) => {
                println!("Canceled.");
            }
            Err(err) => {
                log::error!("{command} failed: {err}");
                println!("Error: {err}");
            }
        }
    }

    println!("Thank you for using spendlog!");
    Ok(())
}

fn run(
    command: Command,
    config: &SpendlogConfig,
    store: &dyn ExpenseStore,
) -> Result<(), SpendlogError> {
    match command {
        Command::Add => add_expense(config, store),
        Command::ViewAll => view_expenses(config, store),
        Command::CategorySummary => category_summary(config, store),
        Command::MonthlySummary => monthly_summary(config, store),
        Command::Delete => delete_expense(config, store),
        Command::Exit => Ok(()),
    }
}

fn add_expense(config: &SpendlogConfig, store: &dyn ExpenseStore) -> Result<(), SpendlogError> {
    let new = ops::NewExpense::prompt(config)?;
    let record = ops::add(store, new)?;
    println!("Expense added: {}{}", config.currency, record);
    Ok(())
}

fn view_expenses(config: &SpendlogConfig, store: &dyn ExpenseStore) -> Result<(), SpendlogError> {
    let records = ops::list(store)?;
    if records.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }
    println!("------ All Expenses ------");
    for (i, record) in records.iter().enumerate() {
        println!("{}. {}{}", i + 1, config.currency, record);
    }
    Ok(())
}

fn category_summary(config: &SpendlogConfig, store: &dyn ExpenseStore) -> Result<(), SpendlogError> {
    let records = ops::list(store)?;
    if records.is_empty() {
        println!("No data available.");
        return Ok(());
    }
    println!("------ Category-wise Summary ------");
    for (category, total) in summary::category_totals(&records) {
        println!("{}: {}{:.2}", category, config.currency, total);
    }
    Ok(())
}

fn monthly_summary(config: &SpendlogConfig, store: &dyn ExpenseStore) -> Result<(), SpendlogError> {
    let records = ops::list(store)?;
    if records.is_empty() {
        println!("No expenses found.");
        return Ok(());
    }
    let month = Text::new("Month (YYYY-MM):").prompt()?;
    let (matches, total) = summary::in_month(&records, &month);
    println!("Expenses for {month}:");
    for record in matches {
        println!("{}{}", config.currency, record);
    }
    println!("Total spent in {}: {}{:.2}", month, config.currency, total);
    Ok(())
}

fn delete_expense(config: &SpendlogConfig, store: &dyn ExpenseStore) -> Result<(), SpendlogError> {
    let records = ops::list(store)?;
    if records.is_empty() {
        println!("No expenses to delete.");
        return Ok(());
    }
    println!("------ All Expenses ------");
    for (i, record) in records.iter().enumerate() {
        println!("{}. {}{}", i + 1, config.currency, record);
    }
    let position = CustomType::<usize>::new("Expense number to delete:")
        .with_error_message("Please type a valid number")
        .prompt()?;
    let removed = ops::delete(store, position)?;
    println!(
        "Deleted expense: {}{:.2} ({})",
        config.currency, removed.amount, removed.category
    );
    Ok(())
}
