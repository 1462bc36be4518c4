// ⚙️ Configuration
// Environment-driven settings for the binary: seed fixture, streak threshold, currency

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const SEED_VAR: &str = "LEDGER_SEED";
pub const THRESHOLD_VAR: &str = "LEDGER_STREAK_THRESHOLD";
pub const CURRENCY_VAR: &str = "LEDGER_CURRENCY";

pub const DEFAULT_THRESHOLD: f64 = 500.0;
pub const DEFAULT_CURRENCY: &str = "€";

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    /// CSV/JSON fixture replacing the built-in seed
    pub seed_path: Option<PathBuf>,

    /// Monthly expense total that counts as "expensive"
    pub streak_threshold: f64,

    /// Prefixed to amounts in the report
    pub currency_symbol: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            seed_path: None,
            streak_threshold: DEFAULT_THRESHOLD,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Read from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = LedgerConfig::default();

        if let Some(path) = get(SEED_VAR) {
            config.seed_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = get(THRESHOLD_VAR) {
            config.streak_threshold = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{} must be a number, got {:?}", THRESHOLD_VAR, raw))?;
        }

        if let Some(symbol) = get(CURRENCY_VAR) {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.streak_threshold, 500.0);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_overrides() {
        let config = LedgerConfig::from_lookup(lookup(&[
            (SEED_VAR, "/tmp/seed.csv"),
            (THRESHOLD_VAR, " 1200.5 "),
            (CURRENCY_VAR, "$"),
        ]))
        .unwrap();

        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.csv")));
        assert_eq!(config.streak_threshold, 1200.5);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = LedgerConfig::from_lookup(lookup(&[(SEED_VAR, "  "), (CURRENCY_VAR, "")])).unwrap();
        assert_eq!(config.seed_path, None);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_bad_threshold_names_variable() {
        let err = LedgerConfig::from_lookup(lookup(&[(THRESHOLD_VAR, "lots")])).unwrap_err();
        assert!(err.to_string().contains(THRESHOLD_VAR));
    }
}
