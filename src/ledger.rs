// 📒 Ledger - the Store
// Ordered, owned collection of transactions plus add/remove and totals.
// Every query recomputes from the current contents; nothing is cached.

use crate::schema::{self, ValidationResult};
use crate::transaction::{NewTransaction, Transaction, TransactionType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    /// Wrap already-validated records, keeping their order
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Ledger { transactions }
    }

    /// Build a ledger by feeding every candidate through `add`.
    /// Rejected candidates are returned alongside, never fatal.
    pub fn from_candidates<I>(candidates: I) -> (Self, Vec<NewTransaction>)
    where
        I: IntoIterator<Item = NewTransaction>,
    {
        let mut ledger = Ledger::new();
        let mut rejected = Vec::new();

        for candidate in candidates {
            if ledger.add(&candidate).is_err() {
                rejected.push(candidate);
            }
        }

        (ledger, rejected)
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    /// Append a copy of the candidate if every required field is present.
    /// On failure the ledger is left untouched.
    pub fn add(&mut self, candidate: &NewTransaction) -> ValidationResult<()> {
        match schema::validate(candidate) {
            Ok(tx) => {
                tracing::debug!(id = tx.id, kind = %tx.transaction_type, date = %tx.date, "transaction added");
                self.transactions.push(tx);
                Ok(())
            }
            Err(errors) => {
                tracing::warn!(
                    missing = ?schema::missing_fields(&errors),
                    "rejected transaction with missing required fields"
                );
                Err(errors)
            }
        }
    }

    /// Remove the first transaction with this id (duplicates after it stay)
    pub fn remove_by_id(&mut self, id: u64) -> Option<Transaction> {
        let index = self.transactions.iter().position(|tx| tx.id == id)?;
        self.remove_at(index)
    }

    /// Remove the transaction at a position in collection order
    pub fn remove_at(&mut self, index: usize) -> Option<Transaction> {
        if index >= self.transactions.len() {
            return None;
        }
        let removed = self.transactions.remove(index);
        tracing::debug!(id = removed.id, index, "transaction removed");
        Some(removed)
    }

    // ========================================================================
    // ACCESS
    // ========================================================================

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// First transaction with this id
    pub fn find_by_id(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    // ========================================================================
    // TOTALS
    // ========================================================================

    fn total_of(&self, kind: TransactionType) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.transaction_type == kind)
            .map(|tx| tx.amount)
            .sum()
    }

    pub fn total_income(&self) -> f64 {
        self.total_of(TransactionType::Income)
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_of(TransactionType::Expense)
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// Highest expense; on ties the earliest one in collection order wins
    pub fn largest_expense(&self) -> Option<&Transaction> {
        let mut largest: Option<&Transaction> = None;
        for tx in self.transactions.iter().filter(|tx| tx.is_expense()) {
            if largest.map_or(true, |current| tx.amount > current.amount) {
                largest = Some(tx);
            }
        }
        largest
    }

    // ========================================================================
    // FILTERS
    // ========================================================================

    /// Case-insensitive exact category match, in collection order
    pub fn by_category(&self, category: &str) -> Vec<&Transaction> {
        let target = category.to_lowercase();
        self.transactions
            .iter()
            .filter(|tx| tx.category.to_lowercase() == target)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
