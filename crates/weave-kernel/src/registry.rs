//! Name-keyed store of finished textiles.
//!
//! The registry is an ordinary value owned by the caller and passed to
//! whatever code publishes models into it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use tracing::{info, instrument, warn};
use weave_types::TextileId;

use crate::textile::Textile;

new_key_type! {
    struct EntryKey;
}

/// What `register` does when the name is already in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Refuse the new textile and keep the existing entry.
    #[default]
    Reject,
    /// Drop the existing entry and store the new textile under the name.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub collision: CollisionPolicy,
}

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("textile name must not be empty")]
    EmptyName,

    #[error("a textile named {name:?} is already registered")]
    NameTaken { name: String },

    #[error("no textile named {name:?}")]
    NotFound { name: String },
}

/// A registered textile with its name and registration id.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub id: TextileId,
    pub name: String,
    pub textile: Textile,
}

#[derive(Debug, Default)]
pub struct TextileRegistry {
    config: RegistryConfig,
    entries: SlotMap<EntryKey, RegistryEntry>,
    by_name: HashMap<String, EntryKey>,
}

impl TextileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Publish `textile` under `name` and return its registration id.
    ///
    /// Surrounding whitespace is stripped from the name before it is stored.
    #[instrument(skip(self, name, textile), fields(name = %name.as_ref(), yarns = textile.yarn_count()))]
    pub fn register(
        &mut self,
        name: impl AsRef<str>,
        textile: Textile,
    ) -> Result<TextileId, RegistryError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if let Some(&existing) = self.by_name.get(name) {
            match self.config.collision {
                CollisionPolicy::Reject => {
                    return Err(RegistryError::NameTaken {
                        name: name.to_string(),
                    });
                }
                CollisionPolicy::Replace => {
                    if let Some(old) = self.entries.remove(existing) {
                        warn!(old_id = %old.id, "replacing registered textile");
                    }
                }
            }
        }

        let id = TextileId::new();
        let key = self.entries.insert(RegistryEntry {
            id,
            name: name.to_string(),
            textile,
        });
        self.by_name.insert(name.to_string(), key);
        info!(%id, total = self.entries.len(), "textile registered");
        Ok(id)
    }

    pub fn get(&self, name: &str) -> Option<&Textile> {
        self.entry(name).map(|e| &e.textile)
    }

    pub fn entry(&self, name: &str) -> Option<&RegistryEntry> {
        self.by_name
            .get(name.trim())
            .and_then(|&key| self.entries.get(key))
    }

    pub fn get_by_id(&self, id: TextileId) -> Option<&RegistryEntry> {
        self.entries.values().find(|e| e.id == id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name.trim())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove(&mut self, name: &str) -> Result<Textile, RegistryError> {
        let key = self
            .by_name
            .remove(name.trim())
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;
        self.entries
            .remove(key)
            .map(|e| e.textile)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }
}
