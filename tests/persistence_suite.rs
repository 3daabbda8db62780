use expense_tracker::{
    core::ExpenseStore,
    domain::{Amount, Expense, ExpenseId},
    storage::{load_expenses_from_path, save_expenses_to_path},
};
use tempfile::TempDir;

fn amount(value: f64) -> Amount {
    Amount::new(value).expect("valid amount")
}

#[test]
fn reads_files_written_by_earlier_versions() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("expenses.json");
    std::fs::write(
        &path,
        r#"[
    {
        "expense": "groceries",
        "id": "0c3f4ff0-9a48-4f0e-9e9f-2c4aa1d0d8b1",
        "amount": 54.2
    }
]"#,
    )
    .expect("write legacy file");

    let expenses = load_expenses_from_path(&path).expect("load legacy file");
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].description, "groceries");
    assert_eq!(expenses[0].amount.value(), 54.2);
    assert_eq!(
        expenses[0].id,
        ExpenseId::from("0c3f4ff0-9a48-4f0e-9e9f-2c4aa1d0d8b1")
    );
}

#[test]
fn written_files_use_the_original_field_names() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("expenses.json");
    let expenses = vec![Expense::new("coffee", amount(3.5)).expect("valid expense")];

    save_expenses_to_path(&expenses, &path).expect("save expenses");

    let raw = std::fs::read_to_string(&path).expect("read store file");
    assert!(raw.contains("\"expense\": \"coffee\""));
    assert!(raw.contains("\"id\""));
    assert!(raw.contains("\"amount\": 3.5"));
}

#[test]
fn mutations_survive_separate_store_instances() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("expenses.json");

    let added = ExpenseStore::new(path.clone())
        .add("coffee", amount(3.5))
        .expect("add expense");

    // A fresh store models a second process invocation on the same file.
    let report = ExpenseStore::new(path.clone())
        .list()
        .expect("list expenses");
    assert_eq!(report.expenses.len(), 1);
    assert_eq!(report.expenses[0].id, added.id);

    ExpenseStore::new(path.clone())
        .delete(&added.id)
        .expect("delete expense");
    assert!(ExpenseStore::new(path).list().expect("list").is_empty());
}

#[test]
fn insertion_order_is_stable_across_many_operations() {
    let temp = TempDir::new().expect("temp dir");
    let store = ExpenseStore::new(temp.path().join("expenses.json"));

    let descriptions = ["rent", "coffee", "lunch", "bus", "books"];
    for (idx, description) in descriptions.iter().enumerate() {
        store
            .add(description, amount((idx + 1) as f64))
            .expect("add expense");
    }

    let middle = store.list().expect("list").expenses[2].id.clone();
    store
        .update(&middle, "late lunch", amount(9.75))
        .expect("update expense");

    let report = store.list().expect("list expenses");
    let seen: Vec<&str> = report
        .expenses
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(seen, vec!["rent", "coffee", "late lunch", "bus", "books"]);
    assert_eq!(report.total, 1.0 + 2.0 + 9.75 + 4.0 + 5.0);
}
