// ⏰ Temporal queries
// Date-range slicing and month buckets over the ledger's current contents.
// Dates are ISO strings, so string order is chronological order.

use crate::ledger::Ledger;
use crate::transaction::{Transaction, TransactionType};
use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// MONTH BUCKET
// ============================================================================

/// Income and expense records of one `YYYY-MM` month, in collection order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthBucket<'a> {
    pub income: Vec<&'a Transaction>,
    pub expense: Vec<&'a Transaction>,
}

impl<'a> MonthBucket<'a> {
    pub fn push(&mut self, tx: &'a Transaction) {
        match tx.transaction_type {
            TransactionType::Income => self.income.push(tx),
            TransactionType::Expense => self.expense.push(tx),
        }
    }

    pub fn len(&self) -> usize {
        self.income.len() + self.expense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn income_total(&self) -> f64 {
        self.income.iter().map(|tx| tx.amount).sum()
    }

    pub fn expense_total(&self) -> f64 {
        self.expense.iter().map(|tx| tx.amount).sum()
    }
}

/// Month key -> bucket, keys in first-encounter order
pub type MonthlyGroups<'a> = IndexMap<String, MonthBucket<'a>>;

// ============================================================================
// QUERIES
// ============================================================================

impl Ledger {
    /// All transactions, stable-sorted by date
    pub fn sorted_by_date(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        sorted
    }

    /// Transactions dated within `[start_date, end_date]`, chronologically.
    ///
    /// Sorts a copy, takes the first index with `date >= start_date` and the
    /// last index with `date <= end_date`, and returns the inclusive slice
    /// between them. Empty when either bound finds nothing or they cross.
    pub fn by_date_range(&self, start_date: &str, end_date: &str) -> Vec<&Transaction> {
        let sorted = self.sorted_by_date();

        let start_index = sorted.iter().position(|tx| tx.date.as_str() >= start_date);
        let end_index = sorted.iter().rposition(|tx| tx.date.as_str() <= end_date);

        match (start_index, end_index) {
            (Some(start), Some(end)) if start <= end => sorted[start..=end].to_vec(),
            _ => Vec::new(),
        }
    }

    /// Partition every transaction into `YYYY-MM` buckets
    pub fn group_by_month(&self) -> MonthlyGroups<'_> {
        let mut groups = MonthlyGroups::new();
        for tx in self {
            groups.entry(tx.month().to_string()).or_default().push(tx);
        }
        groups
    }
}

// ============================================================================
// TESTS
// ============================================================================
