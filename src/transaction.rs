// 💶 Transaction model
// One financial event: income or expense, dated with an ISO YYYY-MM-DD string

use serde::{Deserialize, Serialize};

// ============================================================================
// TRANSACTION TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn name(&self) -> &str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Upper-case label used by the report ("[INCOME]", "[EXPENSE]")
    pub fn label(&self) -> &str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// A validated ledger record. Exactly six fields, all present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub category: String,

    /// Non-negative, currency-agnostic
    pub amount: f64,

    pub description: String,

    /// ISO `YYYY-MM-DD`; string order is chronological order
    pub date: String,
}

impl Transaction {
    pub fn new(
        id: u64,
        transaction_type: TransactionType,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            transaction_type,
            category: category.into(),
            amount,
            description: description.into(),
            date: date.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Month key (`YYYY-MM`): the first seven characters of the date
    pub fn month(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

// ============================================================================
// CANDIDATE
// ============================================================================

/// Input shape for `Ledger::add` and the fixture loaders.
/// Every field may be missing; `schema::validate` decides whether it becomes a `Transaction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(rename = "type", default)]
    pub transaction_type: Option<TransactionType>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub date: Option<String>,
}

impl From<Transaction> for NewTransaction {
    fn from(tx: Transaction) -> Self {
        NewTransaction {
            id: Some(tx.id),
            transaction_type: Some(tx.transaction_type),
            category: Some(tx.category),
            amount: Some(tx.amount),
            description: Some(tx.description),
            date: Some(tx.date),
        }
    }
}

impl From<&Transaction> for NewTransaction {
    fn from(tx: &Transaction) -> Self {
        NewTransaction::from(tx.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key() {
        let tx = Transaction::new(1, TransactionType::Expense, "food", 12.5, "Lunch", "2026-03-14");
        assert_eq!(tx.month(), "2026-03");

        // Short dates fall back to the whole string
        let short = Transaction::new(2, TransactionType::Expense, "food", 1.0, "x", "2026");
        assert_eq!(short.month(), "2026");
    }

    #[test]
    fn test_category_match_ignores_case() {
        let tx = Transaction::new(1, TransactionType::Expense, "Food", 10.0, "Groceries", "2026-01-01");
        assert!(tx.in_category("food"));
        assert!(tx.in_category("FOOD"));
        assert!(!tx.in_category("foo"));
    }

    #[test]
    fn test_serde_uses_type_field() {
        let tx = Transaction::new(7, TransactionType::Income, "salary", 3000.0, "Monthly salary", "2026-01-26");
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["type"], "income");
        assert_eq!(json["id"], 7);

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn test_candidate_missing_fields_deserialize_as_none() {
        let candidate: NewTransaction =
            serde_json::from_str(r#"{"id": 3, "type": "expense", "amount": 10}"#).unwrap();

        assert_eq!(candidate.id, Some(3));
        assert_eq!(candidate.transaction_type, Some(TransactionType::Expense));
        assert_eq!(candidate.category, None);
        assert_eq!(candidate.description, None);
        assert_eq!(candidate.date, None);
    }
}
