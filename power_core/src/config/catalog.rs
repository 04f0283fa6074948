//! Buff catalog loading

use super::ConfigError;
use crate::buff::{Buff, BuffCatalog};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for buff definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub buffs: Vec<Buff>,
}

/// Load a buff catalog from a TOML file
pub fn load_buff_catalog(path: &Path) -> Result<BuffCatalog, ConfigError> {
    let file: CatalogFile = super::load_toml(path)?;
    Ok(BuffCatalog::from_buffs(file.buffs))
}

/// Load a buff catalog from a TOML string
pub fn parse_buff_catalog(content: &str) -> Result<BuffCatalog, ConfigError> {
    let file: CatalogFile = super::parse_toml(content)?;
    Ok(BuffCatalog::from_buffs(file.buffs))
}

/// Load a buff catalog from a JSON array of buffs, the format the companion
/// UI exports
pub fn parse_buff_catalog_json(content: &str) -> Result<BuffCatalog, ConfigError> {
    let buffs: Vec<Buff> = serde_json::from_str(content)?;
    Ok(BuffCatalog::from_buffs(buffs))
}

/// Get the built-in buff catalog
pub fn builtin_catalog() -> BuffCatalog {
    let toml = include_str!("../../config/buffs.toml");
    parse_buff_catalog(toml).unwrap_or_else(|_| BuffCatalog::new())
}
