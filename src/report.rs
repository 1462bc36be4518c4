// 🧾 Report
// Human-readable listing + financial summary, and a serializable summary snapshot.
// Depends only on the ledger's read operations.

use crate::ledger::Ledger;
use crate::transaction::{Transaction, TransactionType};
use chrono::{DateTime, Utc};
use crossterm::style::{style, Attribute, Color, Stylize};
use serde::Serialize;
use std::io::IsTerminal;

/// Symbol prefixed to the plain number: `€3000`, `€60.5`, `€-50`
pub fn format_amount(amount: f64, symbol: &str) -> String {
    format!("{}{}", symbol, amount)
}

// ============================================================================
// SUMMARY SNAPSHOT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub total_transactions: usize,
    pub largest_expense: Option<Transaction>,
    pub generated_at: DateTime<Utc>,
}

impl Summary {
    pub fn of(ledger: &Ledger) -> Self {
        Summary {
            total_income: ledger.total_income(),
            total_expenses: ledger.total_expenses(),
            balance: ledger.balance(),
            total_transactions: ledger.len(),
            largest_expense: ledger.largest_expense().cloned(),
            generated_at: Utc::now(),
        }
    }
}

// ============================================================================
// TEXT REPORT
// ============================================================================

/// How report text is styled: plain, or ANSI colours for a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Ansi,
}

impl Palette {
    /// ANSI when stdout is a terminal and `NO_COLOR` is unset
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
            Palette::Ansi
        } else {
            Palette::Plain
        }
    }

    fn paint(&self, text: String, color: Color) -> String {
        match self {
            Palette::Plain => text,
            Palette::Ansi => style(text).with(color).to_string(),
        }
    }

    fn bold(&self, text: String) -> String {
        match self {
            Palette::Plain => text,
            Palette::Ansi => style(text).attribute(Attribute::Bold).to_string(),
        }
    }
}

/// Numbered list of every transaction followed by the financial summary, uncoloured
pub fn render(ledger: &Ledger, symbol: &str) -> String {
    render_with(ledger, symbol, Palette::Plain)
}

/// Same report; income green, expenses red, categories yellow, balance cyan or red
pub fn render_with(ledger: &Ledger, symbol: &str, palette: Palette) -> String {
    let money = |amount: f64, color: Color| palette.paint(format_amount(amount, symbol), color);

    let mut lines = vec![
        palette.bold("💰 PERSONAL FINANCE TRACKER 💰".to_string()),
        String::new(),
        palette.bold("All Transactions:".to_string()),
    ];
    for (i, tx) in ledger.iter().enumerate() {
        let color = match tx.transaction_type {
            TransactionType::Income => Color::Green,
            TransactionType::Expense => Color::Red,
        };
        lines.push(format!(
            "{}. [{}] {} - {} ({})",
            i + 1,
            tx.transaction_type.label(),
            tx.description,
            money(tx.amount, color),
            palette.paint(tx.category.clone(), Color::Yellow)
        ));
    }

    let summary = Summary::of(ledger);
    let balance_color = if summary.balance >= 0.0 { Color::Cyan } else { Color::Red };
    let largest = match &summary.largest_expense {
        Some(tx) => format!("{} ({})", tx.description, money(tx.amount, Color::Red)),
        None => "none".to_string(),
    };

    lines.push(String::new());
    lines.push(palette.bold("📊 FINANCIAL SUMMARY 📊".to_string()));
    for line in [
        format!("Total Income: {}", money(summary.total_income, Color::Green)),
        format!("Total Expenses: {}", money(summary.total_expenses, Color::Red)),
        format!("Current Balance: {}", money(summary.balance, balance_color)),
        format!("Total Transactions: {}", summary.total_transactions),
        format!("Largest Expense: {}", largest),
    ] {
        lines.push(palette.bold(line));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_transactions;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3000.0, "€"), "€3000");
        assert_eq!(format_amount(60.5, "€"), "€60.5");
        assert_eq!(format_amount(-50.0, "$"), "$-50");
    }

    #[test]
    fn test_render_seed() {
        let ledger = Ledger::from_transactions(sample_transactions());
        let text = render(&ledger, "€");

        assert!(text.contains("1. [INCOME] Monthly salary - €3000 (salary)"));
        assert!(text.contains("3. [EXPENSE] Rent - €1300 (housing)"));
        assert!(text.contains("Total Income: €3600"));
        assert!(text.contains("Total Expenses: €1950"));
        assert!(text.contains("Current Balance: €1650"));
        assert!(text.contains("Total Transactions: 5"));
        assert!(text.contains("Largest Expense: Rent (€1300)"));
    }

    #[test]
    fn test_render_empty() {
        let text = render(&Ledger::new(), "€");
        assert!(text.contains("Total Transactions: 0"));
        assert!(text.contains("Largest Expense: none"));
    }

    #[test]
    fn test_render_ansi_colours_amounts() {
        let ledger = Ledger::from_transactions(sample_transactions());
        let plain = render(&ledger, "€");
        let coloured = render_with(&ledger, "€", Palette::Ansi);

        assert!(!plain.contains('\u{1b}'));
        assert!(coloured.contains('\u{1b}'));
        assert!(coloured.contains(&style("€3000".to_string()).with(Color::Green).to_string()));
        assert!(coloured.contains(&style("€1300".to_string()).with(Color::Red).to_string()));
        assert!(coloured.contains(&style("€1650".to_string()).with(Color::Cyan).to_string()));
        assert!(coloured.contains(&style("housing".to_string()).with(Color::Yellow).to_string()));
    }

    #[test]
    fn test_negative_balance_is_red() {
        let ledger = Ledger::from_transactions(vec![Transaction::new(
            1,
            TransactionType::Expense,
            "rent",
            50.0,
            "Rent",
            "2026-01-01",
        )]);
        let coloured = render_with(&ledger, "€", Palette::Ansi);
        assert!(coloured.contains(&style("€-50".to_string()).with(Color::Red).to_string()));
    }

    #[test]
    fn test_summary_serializes() {
        let ledger = Ledger::from_transactions(sample_transactions());
        let json = serde_json::to_value(Summary::of(&ledger)).unwrap();

        assert_eq!(json["balance"], 1650.0);
        assert_eq!(json["total_transactions"], 5);
        assert_eq!(json["largest_expense"]["id"], 3);
        assert!(json["generated_at"].is_string());
    }
}
