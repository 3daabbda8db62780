pub mod json_backend;

pub use json_backend::{load_expenses_from_path, save_expenses_to_path};
