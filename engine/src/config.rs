//! Table configuration persisted as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use holdem_shared::SeatConfig;

use crate::game::GameState;

/// Table setup: blinds, stack depth and seat names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    pub seats: Vec<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            small_blind: 5,
            big_blind: 10,
            starting_stack: 1000,
            seats: vec!["Player 1".to_owned(), "Player 2".to_owned()],
        }
    }
}

impl TableConfig {
    /// Load configuration from `path`. If the file does not exist, create it
    /// with defaults and return the default config.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: TableConfig = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("creating config directory '{}'", parent.display())
                    })?;
                }
            }
            let cfg = TableConfig::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    /// Save the config to `path` (overwrites).
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_text =
            toml::to_string_pretty(&self).context("serializing config to TOML")?;
        fs::write(path, toml_text)
            .with_context(|| format!("writing config to '{}'", path.display()))?;
        Ok(())
    }

    /// Seat a fresh table from this config with the dealer at seat 0.
    pub fn build_state(&self) -> Result<GameState, crate::error::EngineError> {
        let seats = self
            .seats
            .iter()
            .map(|name| SeatConfig::new(name.clone(), self.starting_stack))
            .collect();
        GameState::new(seats, self.small_blind, self.big_blind, 0)
    }
}
