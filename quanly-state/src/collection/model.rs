use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an item within its owning collection.
///
/// Identifiers carry no ordering semantics; position in the collection is
/// the only order that matters.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a raw identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named entry of an editable collection (an exam part, a tab, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
}

impl Item {
    pub(crate) fn new(id: ItemId, name: String) -> Self {
        Self { id, name }
    }

    /// Return item identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Return display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Read-only snapshot consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionViewModel {
    pub items: Vec<Item>,
    pub active_id: Option<ItemId>,
    pub has_items: bool,
}

/// Normalize a user-provided display name.
///
/// Returns `None` when nothing but whitespace was typed.
pub(crate) fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
