use super::model::{Item, ItemId};
use crate::selection;

/// Runtime state for an ordered collection and its active selection.
#[derive(Debug, Default)]
pub(crate) struct CollectionState {
    items: Vec<Item>,
    active_id: Option<ItemId>,
    next_id: u64,
}

impl CollectionState {
    /// Return items in insertion order.
    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }

    /// Return active item identifier.
    pub(crate) fn active_id(&self) -> Option<&ItemId> {
        self.active_id.as_ref()
    }

    /// Return active item if present.
    pub(crate) fn active_item(&self) -> Option<&Item> {
        let id = self.active_id.as_ref()?;
        self.get(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether an item with the provided identifier exists.
    pub(crate) fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    pub(crate) fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Allocate an identifier not used by any current member.
    ///
    /// The counter never goes backwards, and identifiers that were seeded
    /// from outside are skipped.
    pub(crate) fn allocate_id(&mut self) -> ItemId {
        loop {
            let candidate = ItemId::new(self.next_id.to_string());
            self.next_id += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Append an item. The caller guarantees the id is fresh.
    pub(crate) fn push(&mut self, item: Item) {
        debug_assert!(!self.contains(item.id()));
        self.items.push(item);
    }

    /// Remove the item with the provided identifier.
    pub(crate) fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Replace the name of an existing item.
    pub(crate) fn set_name(&mut self, id: &ItemId, name: String) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.set_name(name);
                true
            },
            None => false,
        }
    }

    /// Re-run selection resolution against the current items.
    ///
    /// Returns `true` when the active identifier changed.
    pub(crate) fn resolve_active(
        &mut self,
        requested: Option<&ItemId>,
    ) -> bool {
        let resolved =
            selection::resolve(requested, &self.items, self.active_id.as_ref());
        if resolved == self.active_id {
            return false;
        }

        self.active_id = resolved;
        true
    }
}
