//! The message registry: resolves identifiers to message definitions.

use crate::code::{Category, MessageId};
use crate::definition::MessageDefinition;
use std::collections::{BTreeMap, HashMap};

/// Errors raised while registering or resolving messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The identifier names no registered message.
    #[error("no message definition for '{0}'")]
    UnknownMessage(String),

    /// A definition reuses an id or symbol that another message already owns.
    #[error("message {id} ({symbol}) conflicts with {existing}")]
    Conflict {
        /// The id being registered.
        id: MessageId,
        /// The symbol being registered.
        symbol: String,
        /// The message that already owns the id or symbol.
        existing: MessageId,
    },
}

/// Registry of every message definition known to a run.
///
/// Besides the primary id and symbol, every old id and old symbol is indexed
/// as an alternative name. An old name may be shared by several renamed
/// messages, so a lookup can resolve to more than one definition.
#[derive(Debug, Default)]
pub struct MessageRegistry {
    definitions: BTreeMap<MessageId, MessageDefinition>,
    symbols: HashMap<String, MessageId>,
    alternative_names: HashMap<String, Vec<MessageId>>,
    by_category: BTreeMap<Category, Vec<MessageId>>,
    by_checker: BTreeMap<String, Vec<MessageId>>,
}

impl MessageRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a checker name, even if it declares no messages.
    pub fn declare_checker(&mut self, name: &str) {
        self.by_checker.entry(name.to_lowercase()).or_default();
    }

    /// Registers a definition under its id, symbol, and old names.
    pub fn register(&mut self, definition: MessageDefinition) -> Result<(), RegistryError> {
        let id = definition.id;
        let existing = self
            .definitions
            .get(&id)
            .map(|d| d.id)
            .or_else(|| self.symbols.get(&definition.symbol).copied());
        if let Some(existing) = existing {
            return Err(RegistryError::Conflict {
                id,
                symbol: definition.symbol,
                existing,
            });
        }

        let mut names = vec![id.to_string(), definition.symbol.clone()];
        for (old_id, old_symbol) in &definition.old_names {
            names.push(old_id.to_string());
            names.push(old_symbol.clone());
        }
        for name in names {
            let ids = self.alternative_names.entry(name).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        self.symbols.insert(definition.symbol.clone(), id);
        self.by_category.entry(id.category).or_default().push(id);
        self.by_checker
            .entry(definition.checker.to_lowercase())
            .or_default()
            .push(id);
        tracing::trace!(%id, symbol = %definition.symbol, "registered message");
        self.definitions.insert(id, definition);
        Ok(())
    }

    /// Resolves a symbol, numeric id, or old name to message ids.
    ///
    /// Numeric ids match case-insensitively; symbols match exactly.
    pub fn lookup(&self, identifier: &str) -> Result<Vec<MessageId>, RegistryError> {
        let key = match identifier.parse::<MessageId>() {
            Ok(id) => id.to_string(),
            Err(_) => identifier.to_string(),
        };
        self.alternative_names
            .get(&key)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownMessage(identifier.to_string()))
    }

    /// Returns the definition for an id.
    pub fn get(&self, id: MessageId) -> Option<&MessageDefinition> {
        self.definitions.get(&id)
    }

    /// Returns the definition for an id, or an unknown-message error.
    pub fn definition(&self, id: MessageId) -> Result<&MessageDefinition, RegistryError> {
        self.get(id)
            .ok_or_else(|| RegistryError::UnknownMessage(id.to_string()))
    }

    /// Returns the symbol for an id, falling back to the id itself.
    pub fn symbol(&self, id: MessageId) -> String {
        self.get(id)
            .map_or_else(|| id.to_string(), |d| d.symbol.clone())
    }

    /// Every message registered under a category, in registration order.
    pub fn by_category(&self, category: Category) -> &[MessageId] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if a checker with this name (case-insensitive) exists.
    pub fn is_checker(&self, name: &str) -> bool {
        self.by_checker.contains_key(&name.to_lowercase())
    }

    /// The messages owned by every checker with this name that are reachable
    /// through at least one alternative name.
    pub fn checker_messages(&self, name: &str) -> Vec<MessageId> {
        self.by_checker
            .get(&name.to_lowercase())
            .map(|ids| {
                ids.iter()
                    .copied()
                    .filter(|id| self.alternative_names.contains_key(&id.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All definitions, sorted by id.
    pub fn definitions(&self) -> impl Iterator<Item = &MessageDefinition> {
        self.definitions.values()
    }

    /// The number of registered messages.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if no messages are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
