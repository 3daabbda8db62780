pub mod store;

pub use store::{ExpenseReport, ExpenseStore};
