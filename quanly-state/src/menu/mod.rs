mod catalog;
mod matcher;
mod model;

pub use catalog::{section, sections};
pub use matcher::{active_entry, match_active};
pub use model::{MenuEntry, MenuIcon, MenuSection};
