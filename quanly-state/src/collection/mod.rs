mod event;
mod model;
mod reducer;
mod state;

use std::fmt;

pub use self::event::{CollectionEffect, CollectionIntent};
pub use self::model::{CollectionViewModel, Item, ItemId};
use self::state::CollectionState;
use crate::notify::{NoopNotifier, Notification, NotificationKind, Notifier};

/// Ordered, uniquely keyed collection with an always-valid active selection.
///
/// All mutation goes through this type. Every successful add, remove or
/// rename invokes the notifier exactly once; rejected input is silently
/// ignored.
pub struct CollectionStore {
    state: CollectionState,
    notifier: Box<dyn Notifier>,
}

impl CollectionStore {
    /// Create an empty store reporting to `notifier`.
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self {
            state: CollectionState::default(),
            notifier: Box::new(notifier),
        }
    }

    /// Create a store pre-populated with `names`, in order.
    ///
    /// Seeding does not notify. Blank names are skipped.
    pub fn with_items<I, S>(names: I, notifier: impl Notifier + 'static) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new(notifier);
        for name in names {
            let name = name.as_ref();
            if reducer::reduce(
                &mut store.state,
                CollectionIntent::Add {
                    name: name.to_owned(),
                },
            )
            .is_empty()
            {
                log::warn!("skipping blank seed item: {name:?}");
            }
        }
        store
    }

    /// Append a new item named `name` (trimmed).
    ///
    /// Returns `None` without touching the collection when the trimmed name
    /// is empty.
    pub fn add(&mut self, name: &str) -> Option<Item> {
        let effects = self.reduce(CollectionIntent::Add {
            name: name.to_owned(),
        });
        effects.into_iter().find_map(|effect| match effect {
            CollectionEffect::Added { item } => Some(item),
            _ => None,
        })
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    ///
    /// When the removed item was active the selection is re-resolved before
    /// this returns.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let effects = self.reduce(CollectionIntent::Remove { id: id.clone() });
        !effects.is_empty()
    }

    /// Rename the item with `id`. Blank names and unknown ids are ignored.
    pub fn rename(&mut self, id: &ItemId, name: &str) -> bool {
        let effects = self.reduce(CollectionIntent::Rename {
            id: id.clone(),
            name: name.to_owned(),
        });
        !effects.is_empty()
    }

    /// Request `requested` as the active item and return the resolved one.
    ///
    /// A request naming an unknown id keeps the current selection.
    pub fn select(&mut self, requested: Option<&ItemId>) -> Option<&ItemId> {
        let _ = self.reduce(CollectionIntent::Select {
            id: requested.cloned(),
        });
        self.state.active_id()
    }

    /// Reduce an intent, notify observers and return the resulting effects.
    pub fn reduce(
        &mut self,
        intent: CollectionIntent,
    ) -> Vec<CollectionEffect> {
        let effects = reducer::reduce(&mut self.state, intent);
        for effect in &effects {
            if let Some(notification) = notification_for(effect) {
                self.notifier.notify(&notification);
            }
        }
        effects
    }

    /// Return items in insertion order.
    pub fn list(&self) -> &[Item] {
        self.state.items()
    }

    pub fn active_id(&self) -> Option<&ItemId> {
        self.state.active_id()
    }

    pub fn active_item(&self) -> Option<&Item> {
        self.state.active_item()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.state.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.state.contains(id)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Produce the view model for rendering.
    pub fn vm(&self) -> CollectionViewModel {
        CollectionViewModel {
            items: self.state.items().to_vec(),
            active_id: self.state.active_id().cloned(),
            has_items: !self.state.is_empty(),
        }
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new(NoopNotifier)
    }
}

impl fmt::Debug for CollectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionStore")
            .field("items", &self.state.items())
            .field("active_id", &self.state.active_id())
            .finish_non_exhaustive()
    }
}

fn notification_for(effect: &CollectionEffect) -> Option<Notification> {
    match effect {
        CollectionEffect::Added { item } => {
            Some(Notification::new(NotificationKind::Added, item.name()))
        },
        CollectionEffect::Removed { item, .. } => {
            Some(Notification::new(NotificationKind::Removed, item.name()))
        },
        CollectionEffect::Renamed { name, .. } => {
            Some(Notification::new(NotificationKind::Renamed, name.as_str()))
        },
        CollectionEffect::Activated { .. } => None,
    }
}
