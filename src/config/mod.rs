use std::{env, path::PathBuf};

const DEFAULT_STORE_FILE: &str = "expenses.json";
const STORE_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// Process-wide configuration, built once at startup and passed by value into
/// the dispatcher. No global mutable state.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_file: PathBuf,
}

impl Config {
    /// Resolves the store file location: explicit flag, then the
    /// `EXPENSE_TRACKER_FILE` environment variable, then `expenses.json` in
    /// the working directory.
    pub fn resolve(file_flag: Option<PathBuf>) -> Self {
        let store_file = file_flag
            .or_else(|| env::var_os(STORE_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
        Self { store_file }
    }
}
