// 🌱 Seed data & fixture loading
// Supplies the ledger's initial contents: the built-in seed or a CSV/JSON file

use crate::transaction::{NewTransaction, Transaction, TransactionType};
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// The five built-in seed transactions
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            1,
            TransactionType::Income,
            "salary",
            3000.0,
            "Monthly salary",
            "2026-01-26",
        ),
        Transaction::new(
            2,
            TransactionType::Expense,
            "food",
            400.0,
            "Groceries",
            "2026-01-28",
        ),
        Transaction::new(
            3,
            TransactionType::Expense,
            "housing",
            1300.0,
            "Rent",
            "2026-01-27",
        ),
        Transaction::new(
            4,
            TransactionType::Income,
            "side-income",
            600.0,
            "Freelance",
            "2026-01-29",
        ),
        Transaction::new(
            5,
            TransactionType::Expense,
            "bills",
            250.0,
            "Utilities",
            "2026-01-30",
        ),
    ]
}

/// Built-in seed as candidates, for feeding through `Ledger::from_candidates`
pub fn sample_candidates() -> Vec<NewTransaction> {
    sample_transactions()
        .into_iter()
        .map(NewTransaction::from)
        .collect()
}

/// Load candidates from a CSV file with header `id,type,category,amount,description,date`.
/// Empty cells become missing fields; validation happens later in `Ledger::add`.
pub fn load_csv(csv_path: &Path) -> Result<Vec<NewTransaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut candidates = Vec::new();

    for (line, result) in rdr.deserialize().enumerate() {
        let candidate: NewTransaction = result
            .with_context(|| format!("Failed to deserialize transaction on row {}", line + 1))?;
        candidates.push(candidate);
    }

    tracing::debug!(path = ?csv_path, count = candidates.len(), "loaded CSV fixture");
    Ok(candidates)
}

/// Load candidates from a JSON array
pub fn load_json(json_path: &Path) -> Result<Vec<NewTransaction>> {
    let content = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read fixture file: {:?}", json_path))?;

    let candidates: Vec<NewTransaction> =
        serde_json::from_str(&content).context("Failed to parse fixture JSON")?;

    tracing::debug!(path = ?json_path, count = candidates.len(), "loaded JSON fixture");
    Ok(candidates)
}

/// Pick the loader from the file extension
pub fn load_path(path: &Path) -> Result<Vec<NewTransaction>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        _ => Err(anyhow!(
            "Unsupported fixture format {:?} (expected .csv or .json)",
            path
        )),
    }
}
