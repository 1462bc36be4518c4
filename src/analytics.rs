// 📊 Analytics
// Category averages and consecutive expensive-month streaks

use crate::ledger::Ledger;
use indexmap::IndexMap;

impl Ledger {
    /// Mean expense amount per category label, categories in first-encounter order.
    /// Labels are taken as written, so "Food" and "food" are separate keys.
    pub fn average_expense_per_category(&self) -> IndexMap<String, f64> {
        let mut sum_count: IndexMap<&str, (f64, usize)> = IndexMap::new();
        for tx in self.iter().filter(|tx| tx.is_expense()) {
            let entry = sum_count.entry(tx.category.as_str()).or_insert((0.0, 0));
            entry.0 += tx.amount;
            entry.1 += 1;
        }

        sum_count
            .into_iter()
            .map(|(category, (sum, count))| (category.to_string(), sum / count as f64))
            .collect()
    }

    /// Expense total of every month present in the data, chronological.
    /// A month holding only income is present with a total of zero.
    pub fn monthly_expense_totals(&self) -> IndexMap<String, f64> {
        let mut totals: IndexMap<String, f64> = self
            .group_by_month()
            .into_iter()
            .map(|(month, bucket)| (month, bucket.expense_total()))
            .collect();
        totals.sort_keys();
        totals
    }

    /// Runs of two or more adjacent months whose expenses reach `threshold`.
    ///
    /// Adjacent means next to each other in the sorted list of months that
    /// occur in the data; a calendar month with no transactions is simply
    /// absent and does not break a run.
    pub fn consecutive_expensive_months(&self, threshold: f64) -> Vec<Vec<String>> {
        let totals = self.monthly_expense_totals();

        let mut runs = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for (month, total) in totals {
            if total >= threshold {
                current.push(month);
                continue;
            }
            if current.len() >= 2 {
                runs.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
        if current.len() >= 2 {
            runs.push(current);
        }

        runs
    }
}

// ============================================================================
// TESTS
// ============================================================================
