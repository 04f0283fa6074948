//! Buff catalog - global, read-only stat boosts a character can activate

use crate::types::AttributeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display grouping for a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffCategory {
    Skill,
    Potion,
}

/// A single attribute adjustment granted by a buff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuffEffect {
    pub attribute: AttributeId,
    pub value: f64,
}

/// A catalog entry.
///
/// Buffs are stateless and owned by the catalog, not by any character; a
/// character activates a subset by id at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub id: String,
    /// Display name
    pub name: String,
    /// Cosmetic grouping for the UI
    pub category: BuffCategory,
    /// Attribute adjustments, applied in listed order
    pub effects: Vec<BuffEffect>,
}

impl Buff {
    /// Create a buff with no effects yet
    pub fn new(id: &str, name: &str, category: BuffCategory) -> Self {
        Buff {
            id: id.to_string(),
            name: name.to_string(),
            category,
            effects: Vec::new(),
        }
    }

    /// Add an effect, builder style
    pub fn with_effect(mut self, attribute: AttributeId, value: f64) -> Self {
        self.effects.push(BuffEffect { attribute, value });
        self
    }
}

/// Read-only collection of buffs, keyed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuffCatalog {
    buffs: BTreeMap<String, Buff>,
}

impl BuffCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        BuffCatalog::default()
    }

    /// Build a catalog from a list of buffs. Later entries win on id clashes.
    pub fn from_buffs(buffs: impl IntoIterator<Item = Buff>) -> Self {
        let mut catalog = BuffCatalog::new();
        for buff in buffs {
            catalog.insert(buff);
        }
        catalog
    }

    /// Deserialize a catalog from a JSON array of buffs, the shape the
    /// companion UI persists.
    pub fn from_json(content: &str) -> Result<BuffCatalog, serde_json::Error> {
        let buffs: Vec<Buff> = serde_json::from_str(content)?;
        Ok(BuffCatalog::from_buffs(buffs))
    }

    /// Add or replace a buff
    pub fn insert(&mut self, buff: Buff) {
        self.buffs.insert(buff.id.clone(), buff);
    }

    /// Look up a buff by id
    pub fn get(&self, id: &str) -> Option<&Buff> {
        self.buffs.get(id)
    }

    /// Iterate over all buffs in id order
    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.buffs.values()
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }
}
