use crate::location::Location;

/// Icon shown next to a menu label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    List,
    Add,
    Folder,
    Book,
    Cart,
    Question,
    Chart,
    Users,
    Upload,
    Trash,
    Ticket,
    Calendar,
}

/// Static navigation target of a sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: MenuIcon,
    /// Route including the `tab` query value this entry is matched against.
    pub path: &'static str,
}

impl MenuEntry {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        icon: MenuIcon,
        path: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            path,
        }
    }

    /// Return the `tab` value encoded in [`MenuEntry::path`].
    ///
    /// Entries whose path carries no `tab` parameter match on their id.
    pub fn tab_value(&self) -> String {
        Location::parse(self.path)
            .tab()
            .unwrap_or(self.id)
            .to_owned()
    }
}

/// Top-level dashboard area with its sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: MenuIcon,
    pub entries: &'static [MenuEntry],
}

#[cfg(test)]
mod tests {
    use super::{MenuEntry, MenuIcon};

    #[test]
    fn given_path_with_tab_when_decoded_then_tab_value_is_used() {
        let entry =
            MenuEntry::new("list", "Danh sách", MenuIcon::List, "/x?tab=all");

        assert_eq!(entry.tab_value(), "all");
    }

    #[test]
    fn given_path_without_tab_when_decoded_then_id_is_used() {
        let entry = MenuEntry::new("list", "Danh sách", MenuIcon::List, "/x");

        assert_eq!(entry.tab_value(), "list");
    }
}
