//! @acp:module "Value Catalog"
//! @acp:summary "Load and validate the weekly value catalog"
//! @acp:domain core
//! @acp:layer io
//!
//! The built-in catalog is embedded at compile time. A project may point
//! its config at a replacement file with the same shape.

use std::path::Path;

use thiserror::Error;

use super::selector::TASKS_PER_DAY;
use super::types::{ValueCatalog, WORKING_DAYS};

/// Catalog configuration gaps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no value configured for day {0}")]
    MissingDay(u8),

    #[error("more than one value configured for day {0}")]
    DuplicateDay(u8),

    #[error("value '{name}' has day {day}, expected 1..=6")]
    DayOutOfRange { name: String, day: u8 },

    #[error("value for day {0} has a blank name")]
    BlankName(u8),

    #[error("value '{name}' has {size} tasks, at least {min} are required")]
    PoolTooSmall { name: String, size: usize, min: usize },
}

impl ValueCatalog {
    /// @acp:summary "Catalog shipped with the binary"
    pub fn builtin() -> crate::Result<Self> {
        let json = include_str!("../../catalog/values.json");
        Self::from_json(json)
    }

    /// @acp:summary "Load a replacement catalog from disk"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            "Loaded value catalog from {} ({} values)",
            path.as_ref().display(),
            catalog.values.len()
        );
        Ok(catalog)
    }

    /// Parse and validate
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// @acp:summary "Check that every working day has exactly one usable value"
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = [false; WORKING_DAYS as usize];

        for value in &self.values {
            let day = value.day_of_week;
            if !(1..=WORKING_DAYS).contains(&day) {
                return Err(CatalogError::DayOutOfRange {
                    name: value.name.clone(),
                    day,
                });
            }
            let slot = &mut seen[(day - 1) as usize];
            if *slot {
                return Err(CatalogError::DuplicateDay(day));
            }
            *slot = true;

            if value.name.trim().is_empty() {
                return Err(CatalogError::BlankName(day));
            }
            if value.all_tasks.len() < TASKS_PER_DAY {
                return Err(CatalogError::PoolTooSmall {
                    name: value.name.clone(),
                    size: value.all_tasks.len(),
                    min: TASKS_PER_DAY,
                });
            }
        }

        match seen.iter().position(|covered| !covered) {
            Some(missing) => Err(CatalogError::MissingDay(missing as u8 + 1)),
            None => Ok(()),
        }
    }
}
