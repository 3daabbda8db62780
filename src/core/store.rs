use std::path::PathBuf;

use crate::{
    domain::{validate_description, Amount, Expense, ExpenseId},
    errors::{ExpenseError, Result},
    storage::{load_expenses_from_path, save_expenses_to_path},
};

/// Snapshot returned by [`ExpenseStore::list`]: the collection in insertion
/// order plus the running total.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseReport {
    pub expenses: Vec<Expense>,
    pub total: f64,
}

impl ExpenseReport {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Persistence and mutation layer over the expense collection. Every
/// operation reads the store file wholesale and writes it back at most once,
/// only after validation and lookup have succeeded.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Validates the fields, assigns a fresh id, and appends the new record.
    pub fn add(&self, description: &str, amount: Amount) -> Result<Expense> {
        let expense = Expense::new(description, amount)?;
        let mut expenses = self.load()?;
        // Fresh ids never collide in practice; dropping a match keeps the
        // uniqueness invariant unconditional.
        expenses.retain(|entry| entry.id != expense.id);
        expenses.push(expense.clone());
        self.save(&expenses)?;
        tracing::info!(id = %expense.id, "added expense");
        Ok(expense)
    }

    /// Replaces the description and amount of the matching record in place,
    /// preserving its position and id.
    pub fn update(&self, id: &ExpenseId, description: &str, amount: Amount) -> Result<Expense> {
        let description = validate_description(description)?;
        let mut expenses = self.load()?;
        let entry = expenses
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        entry.description = description;
        entry.amount = amount;
        let updated = entry.clone();
        self.save(&expenses)?;
        tracing::info!(id = %updated.id, "updated expense");
        Ok(updated)
    }

    /// Removes the matching record, keeping the rest in order.
    pub fn delete(&self, id: &ExpenseId) -> Result<()> {
        let expenses = self.load()?;
        let before = expenses.len();
        let remaining: Vec<Expense> = expenses
            .into_iter()
            .filter(|entry| &entry.id != id)
            .collect();
        if remaining.len() == before {
            return Err(ExpenseError::NotFound(id.to_string()));
        }
        self.save(&remaining)?;
        tracing::info!(%id, "deleted expense");
        Ok(())
    }

    /// Returns the collection unmodified plus the sum of all amounts.
    pub fn list(&self) -> Result<ExpenseReport> {
        let expenses = self.load()?;
        let total = expenses.iter().map(|entry| entry.amount.value()).sum();
        Ok(ExpenseReport { expenses, total })
    }

    fn load(&self) -> Result<Vec<Expense>> {
        load_expenses_from_path(&self.path)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        save_expenses_to_path(expenses, &self.path)
    }
}
