// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use finance_ledger::{
    load_path, logging, render_with, sample_candidates, Ledger, LedgerConfig, NewTransaction, Palette,
    Summary, TransactionType,
};
use std::env;

fn main() -> Result<()> {
    logging::init();

    let config = LedgerConfig::from_env()?;
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("demo") => run_demo(&config)?,
        Some("report") => run_report(&config)?,
        Some("json") => run_json(&config)?,
        Some("ui") => run_ui_mode(&config)?,
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   Usage: finance-ledger [demo|report|json|ui]");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Seed from the configured fixture, or the built-in five transactions
fn load_ledger(config: &LedgerConfig) -> Result<Ledger> {
    let candidates = match &config.seed_path {
        Some(path) => load_path(path)?,
        None => sample_candidates(),
    };

    let (ledger, rejected) = Ledger::from_candidates(candidates);
    if !rejected.is_empty() {
        tracing::warn!(count = rejected.len(), "seed rows skipped");
    }
    Ok(ledger)
}

fn run_report(config: &LedgerConfig) -> Result<()> {
    let ledger = load_ledger(config)?;
    print!("{}", render_with(&ledger, &config.currency_symbol, Palette::detect()));
    Ok(())
}

fn run_json(config: &LedgerConfig) -> Result<()> {
    let ledger = load_ledger(config)?;

    let output = serde_json::json!({
        "summary": Summary::of(&ledger),
        "by_month": ledger.group_by_month(),
        "average_expense_per_category": ledger.average_expense_per_category(),
        "consecutive_expensive_months": ledger.consecutive_expensive_months(config.streak_threshold),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_demo(config: &LedgerConfig) -> Result<()> {
    let mut ledger = load_ledger(config)?;
    let symbol = &config.currency_symbol;
    let palette = Palette::detect();

    print!("{}", render_with(&ledger, symbol, palette));

    let train_ticket = NewTransaction {
        id: Some(6),
        transaction_type: Some(TransactionType::Expense),
        category: Some("transport".to_string()),
        amount: Some(60.0),
        description: Some("Train ticket".to_string()),
        date: Some("2026-02-02".to_string()),
    };
    if let Err(errors) = ledger.add(&train_ticket) {
        for error in &errors {
            eprintln!("❌ {}", error);
        }
    }

    println!("\nAfter adding one transaction:\n");
    print!("{}", render_with(&ledger, symbol, palette));

    let food = ledger.by_category("food");
    println!("\nFood transactions: {}", serde_json::to_string_pretty(&food)?);

    let range = ledger.by_date_range("2026-02-02", "2026-02-04");
    println!(
        "\nDate range 2026-02-02..2026-02-04: {}",
        serde_json::to_string_pretty(&range)?
    );

    println!(
        "\nGrouped by month: {}",
        serde_json::to_string_pretty(&ledger.group_by_month())?
    );

    println!(
        "\nAverage expense per category: {}",
        serde_json::to_string_pretty(&ledger.average_expense_per_category())?
    );

    match ledger.remove_by_id(2) {
        Some(removed) => println!(
            "\nRemoved transaction with id=2: {}",
            serde_json::to_string_pretty(&removed)?
        ),
        None => println!("\nRemoved transaction with id=2: none"),
    }

    let sequences = ledger.consecutive_expensive_months(config.streak_threshold);
    println!(
        "\nConsecutive expensive months (>= {}): {:?}",
        config.streak_threshold, sequences
    );

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &LedgerConfig) -> Result<()> {
    let ledger = load_ledger(config)?;
    println!("✓ Loaded {} transactions", ledger.len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(
        ledger,
        config.currency_symbol.clone(),
        config.streak_threshold,
    );
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &LedgerConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
