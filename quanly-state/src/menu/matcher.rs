use super::model::MenuEntry;

/// Return the entry highlighted for the current `tab` query value.
///
/// Falls back to the first entry when `current` is absent or matches
/// nothing, so a non-empty menu always has exactly one active entry.
pub fn active_entry<'a>(
    entries: &'a [MenuEntry],
    current: Option<&str>,
) -> Option<&'a MenuEntry> {
    current
        .and_then(|value| {
            entries.iter().find(|entry| entry.tab_value() == value)
        })
        .or_else(|| entries.first())
}

/// Return the id of the entry highlighted for the current `tab` query value.
pub fn match_active(
    entries: &[MenuEntry],
    current: Option<&str>,
) -> Option<&'static str> {
    active_entry(entries, current).map(|entry| entry.id)
}
