//! CLI argument definitions using clap.
//!
//! Exactly one of `--add`, `--view`, `--update`, `--delete` selects the
//! operation; field flags supply its inputs. Mutual exclusion and
//! per-operation required fields are enforced by the dispatcher so that the
//! conflicts surface as ordinary printed messages.

use clap::Parser;
use std::path::PathBuf;

/// Track your expenses and income
#[derive(Parser, Debug, Default)]
#[command(name = "expense_tracker")]
#[command(version, about, after_help = "Thank you for using Expense Tracker!")]
pub struct Cli {
    /// Add a new expense (requires --expense and --amount)
    #[arg(long)]
    pub add: bool,

    /// View all expenses
    #[arg(short, long)]
    pub view: bool,

    /// Update an expense (requires --id, --expense, and --amount)
    #[arg(short, long)]
    pub update: bool,

    /// Delete an expense (requires --id)
    #[arg(short, long)]
    pub delete: bool,

    /// ID of the expense (required for --delete and --update)
    #[arg(short, long)]
    pub id: Option<String>,

    /// Expense description
    #[arg(short, long)]
    pub expense: Option<String>,

    /// Amount of the expense (required for --add and --update)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Store file to use instead of ./expenses.json
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
