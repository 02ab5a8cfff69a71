//! Active-selection resolution for ordered collections.
//!
//! [`resolve`] is the single place that decides which item is active after a
//! selection request or a collection mutation. It is a pure function of its
//! three inputs, so callers thread the previous selection through explicitly:
//!
//! ```
//! use quanly_state::{Item, ItemId, selection};
//!
//! fn next_active(items: &[Item], prior: Option<&ItemId>) -> Option<ItemId> {
//!     // No explicit request: keep the prior selection if it survived.
//!     selection::resolve(None, items, prior)
//! }
//! ```

use crate::collection::{Item, ItemId};

/// Compute the active item identifier.
///
/// Resolution order:
/// 1. `requested`, when it names an item of `items`;
/// 2. `prior`, when it still names an item of `items`;
/// 3. the first item of `items`, or `None` when `items` is empty.
///
/// The result is `None` only for an empty collection.
pub fn resolve(
    requested: Option<&ItemId>,
    items: &[Item],
    prior: Option<&ItemId>,
) -> Option<ItemId> {
    let present = |id: &&ItemId| items.iter().any(|item| item.id() == *id);

    requested
        .filter(present)
        .or_else(|| prior.filter(present))
        .or_else(|| items.first().map(Item::id))
        .cloned()
}
