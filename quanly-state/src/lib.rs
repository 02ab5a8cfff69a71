//! Selection state for the quanly admin dashboard.
//!
//! Dashboard screens share one pattern: an ordered, uniquely keyed list
//! (exam parts, tabs, editable rows) with an active entry that has to stay
//! valid while the list changes and while the router reports new locations.
//! This crate holds that pattern and nothing view-specific:
//! - [`CollectionStore`] owns the list and its active item;
//! - [`selection::resolve`] decides the active item after any change;
//! - [`menu::match_active`] picks the highlighted static sub-menu entry
//!   from the `tab` query value;
//! - [`EditingSession`] routes view events and router locations into a store.
//!
//! Everything is synchronous and single-threaded.
//!
//! # Quick Example
//!
//! ```
//! use quanly_state::{CollectionStore, NoopNotifier};
//!
//! let mut parts = CollectionStore::new(NoopNotifier);
//! let first = parts.add("Phần 1").expect("name is not blank");
//! let second = parts.add("Phần 2").expect("name is not blank");
//! assert!(parts.add("   ").is_none());
//!
//! parts.select(Some(second.id()));
//! parts.remove(second.id());
//! assert_eq!(parts.active_id(), Some(first.id()));
//! ```

pub mod collection;
pub mod location;
pub mod menu;
pub mod notify;
pub mod selection;
pub mod session;
pub mod settings;

pub use collection::{
    CollectionEffect, CollectionIntent, CollectionStore, CollectionViewModel,
    Item, ItemId,
};
pub use location::{Location, TAB_PARAM};
pub use notify::{
    LogNotifier, NoopNotifier, Notification, NotificationKind, Notifier,
};
pub use session::{EditingSession, SessionEvent};
pub use settings::{SettingsData, SettingsError};
