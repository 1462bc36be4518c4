// Finance Ledger - Core Library
// Exposes all modules for use in the CLI, the TUI, and tests

pub mod transaction;
pub mod schema;         // Presence validation for candidates
pub mod ledger;         // Store, mutators, totals, filters
pub mod temporal;       // Date range + monthly grouping
pub mod analytics;      // Category averages + expensive-month streaks
pub mod seed;           // Built-in seed and CSV/JSON fixtures
pub mod config;
pub mod report;
pub mod logging;

// Re-export commonly used types
pub use transaction::{NewTransaction, Transaction, TransactionType};
pub use schema::{validate, ValidationError, ValidationResult};
pub use ledger::Ledger;
pub use temporal::{MonthBucket, MonthlyGroups};
pub use seed::{load_csv, load_json, load_path, sample_candidates, sample_transactions};
pub use config::LedgerConfig;
pub use report::{format_amount, render, render_with, Palette, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
