//! Bot configuration.

use super::error::ConfigError;
use super::strategy::StrategyKind;
use super::symbols::SymbolSet;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a [`Bot`](crate::Bot).
///
/// Every field has a default, so an empty TOML file is a valid config:
///
/// ```toml
/// strategy = "alpha-beta"
/// report_timing = false
/// strict_balance = true
///
/// [symbols]
/// cross = "X"
/// zero = "O"
/// empty = "."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BotConfig {
    /// Strategy used to pick squares.
    #[serde(default)]
    strategy: StrategyKind,

    /// Log search time at `info` rather than `debug`.
    #[serde(default = "default_report_timing")]
    report_timing: bool,

    /// Reject boards whose mark counts differ by more than one.
    #[serde(default)]
    strict_balance: bool,

    /// Characters of the board text format.
    #[serde(default)]
    symbols: SymbolSet,
}

#[instrument]
fn default_report_timing() -> bool {
    true
}

impl BotConfig {
    /// Creates a configuration for `strategy` with all other fields defaulted.
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            report_timing: default_report_timing(),
            strict_balance: false,
            symbols: SymbolSet::default(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.symbols.validate()?;
        Ok(config)
    }

    /// Replaces the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables the strict balance check.
    pub fn with_strict_balance(mut self, strict: bool) -> Self {
        self.strict_balance = strict;
        self
    }

    /// Replaces the board symbols.
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}
