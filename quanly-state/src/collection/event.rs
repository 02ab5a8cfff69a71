use super::model::{Item, ItemId};

/// Requests produced by list/tab views and reduced by the collection store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionIntent {
    Add { name: String },
    Remove { id: ItemId },
    Rename { id: ItemId, name: String },
    /// Local click or external signal asking for a specific active item.
    Select { id: Option<ItemId> },
}

/// State changes produced by the collection reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionEffect {
    /// Item appended to the end of the collection.
    Added { item: Item },
    /// Item removed, with the selection that survived the removal.
    Removed {
        item: Item,
        new_active_id: Option<ItemId>,
        remaining: usize,
    },
    Renamed { id: ItemId, name: String },
    /// Active identifier changed; emitted only on an actual change.
    Activated { active_id: Option<ItemId> },
}
