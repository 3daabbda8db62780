pub mod expense;

pub use expense::{validate_description, Amount, Expense, ExpenseId};
