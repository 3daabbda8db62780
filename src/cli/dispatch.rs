use clap::CommandFactory;

use crate::{
    cli::{
        args::Cli,
        output,
        table::{Alignment, Table, TableColumn},
    },
    config::Config,
    core::{ExpenseReport, ExpenseStore},
    domain::{Amount, ExpenseId},
    errors::{ExpenseError, Result},
};

/// Which primary operation the invocation selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Add,
    View,
    Update,
    Delete,
}

/// Resolves the flags into exactly one operation, validates its required
/// fields, and invokes the store. Selecting no operation prints help.
pub fn run_cli(cli: Cli, config: &Config) -> Result<()> {
    let Some(operation) = selected_operation(&cli)? else {
        let mut command = Cli::command();
        let _ = command.print_help();
        return Ok(());
    };

    let store = ExpenseStore::new(config.store_file.clone());
    match operation {
        Operation::Add => {
            let (description, amount) = require_fields(
                &cli,
                "--amount and --expense are required for --add.",
            )?;
            let expense = store.add(&description, amount)?;
            output::success(format!("Added expense with ID: {}", expense.id));
        }
        Operation::Delete => {
            let id = require_id(&cli, "--id is required for --delete operation.")?;
            store.delete(&id)?;
            output::success(format!("Deleted expense with ID: {id}"));
        }
        Operation::Update => {
            let id = require_id(
                &cli,
                "--id, --amount, and --expense are required for --update.",
            )?;
            let (description, amount) = require_fields(
                &cli,
                "--id, --amount, and --expense are required for --update.",
            )?;
            let expense = store.update(&id, &description, amount)?;
            output::success(format!(
                "Updated expense with ID: {} to {} - {}",
                expense.id, expense.description, expense.amount
            ));
        }
        Operation::View => {
            let report = store.list()?;
            render_view(&report);
        }
    }
    Ok(())
}

fn selected_operation(cli: &Cli) -> Result<Option<Operation>> {
    let selected: Vec<Operation> = [
        (cli.add, Operation::Add),
        (cli.delete, Operation::Delete),
        (cli.update, Operation::Update),
        (cli.view, Operation::View),
    ]
    .into_iter()
    .filter_map(|(flag, op)| flag.then_some(op))
    .collect();

    match selected.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        _ => Err(ExpenseError::Usage(
            "Please specify only one operation at a time (--add, --delete, --update, or --view)."
                .into(),
        )),
    }
}

fn require_id(cli: &Cli, message: &str) -> Result<ExpenseId> {
    cli.id
        .as_deref()
        .map(ExpenseId::from)
        .ok_or_else(|| ExpenseError::Usage(message.into()))
}

/// Pre-condition gate for add/update: both field flags present, amount parsed
/// into a positive value at the boundary.
fn require_fields(cli: &Cli, message: &str) -> Result<(String, Amount)> {
    let (Some(description), Some(raw_amount)) = (cli.expense.as_deref(), cli.amount.as_deref())
    else {
        return Err(ExpenseError::Usage(message.into()));
    };
    let amount = Amount::parse(raw_amount)?;
    Ok((description.to_string(), amount))
}

fn render_view(report: &ExpenseReport) {
    if report.is_empty() {
        output::info("No expenses found.");
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::new("ID", Alignment::Left),
        TableColumn::new("Expense", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
    ]);
    for expense in &report.expenses {
        table.push_row(vec![
            expense.id.to_string(),
            expense.description.clone(),
            expense.amount.to_string(),
        ]);
    }
    output::info(table.render());
    output::info(format!("\nTotal Expenses: ${:.2}", report.total));
}
