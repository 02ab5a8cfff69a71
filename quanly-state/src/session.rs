//! Controller backing a single editing view (exam parts, tab strips, ...).

use uuid::Uuid;

use crate::collection::{
    CollectionEffect, CollectionIntent, CollectionStore, CollectionViewModel,
    ItemId,
};
use crate::location::Location;
use crate::notify::Notifier;
use crate::settings::SettingsData;

/// Events delivered by the view layer, handled in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Local interaction: add, remove, rename, click.
    Collection(CollectionIntent),
    /// The router reported a new location; its `tab` value is a selection
    /// request.
    Navigated(Location),
}

/// Editing session owning one collection and its active selection.
#[derive(Debug)]
pub struct EditingSession {
    id: Uuid,
    store: CollectionStore,
}

impl EditingSession {
    /// Start a session seeded with the configured initial items.
    pub fn new(
        settings: &SettingsData,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let id = Uuid::new_v4();
        let store = CollectionStore::with_items(
            settings.normalized_initial_items(),
            notifier,
        );
        log::debug!("session {id} started with {} item(s)", store.len());
        Self { id, store }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    /// Produce the view model for rendering.
    pub fn vm(&self) -> CollectionViewModel {
        self.store.vm()
    }

    /// Handle a view event and return what changed.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<CollectionEffect> {
        let effects = match event {
            SessionEvent::Collection(intent) => self.store.reduce(intent),
            SessionEvent::Navigated(location) => self.navigate(&location),
        };

        for effect in &effects {
            log_effect(self.id, effect);
        }
        effects
    }

    fn navigate(&mut self, location: &Location) -> Vec<CollectionEffect> {
        let Some(tab) = location.tab() else {
            return Vec::new();
        };

        self.store.reduce(CollectionIntent::Select {
            id: Some(ItemId::from(tab)),
        })
    }
}

fn log_effect(session: Uuid, effect: &CollectionEffect) {
    match effect {
        CollectionEffect::Added { item } => {
            log::debug!("session {session}: added item {}", item.id());
        },
        CollectionEffect::Removed {
            item, remaining, ..
        } => {
            log::debug!(
                "session {session}: removed item {} ({remaining} left)",
                item.id()
            );
        },
        CollectionEffect::Renamed { id, .. } => {
            log::debug!("session {session}: renamed item {id}");
        },
        CollectionEffect::Activated { active_id } => match active_id {
            Some(id) => log::debug!("session {session}: active item {id}"),
            None => log::debug!("session {session}: selection cleared"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{EditingSession, SessionEvent};
    use crate::collection::{CollectionEffect, CollectionIntent, ItemId};
    use crate::location::Location;
    use crate::notify::NoopNotifier;
    use crate::settings::SettingsData;

    fn seeded(names: &[&str]) -> EditingSession {
        let settings = SettingsData {
            initial_items: names.iter().map(|name| name.to_string()).collect(),
            ..SettingsData::default()
        };
        EditingSession::new(&settings, NoopNotifier)
    }

    fn item_id(session: &EditingSession, index: usize) -> ItemId {
        session.store().list()[index].id().clone()
    }

    #[test]
    fn given_tab_in_location_when_navigated_then_matching_item_is_active() {
        let mut session = seeded(&["Phần 1", "Phần 2"]);
        let second = item_id(&session, 1);

        let effects = session.handle(SessionEvent::Navigated(Location::parse(
            &format!("/exams/create?tab={second}"),
        )));

        assert_eq!(
            effects,
            vec![CollectionEffect::Activated {
                active_id: Some(second.clone())
            }]
        );
        assert_eq!(session.vm().active_id, Some(second));
    }

    #[test]
    fn given_location_without_tab_when_navigated_then_selection_is_kept() {
        let mut session = seeded(&["Phần 1", "Phần 2"]);
        let second = item_id(&session, 1);
        session.handle(SessionEvent::Collection(CollectionIntent::Select {
            id: Some(second.clone()),
        }));

        let effects =
            session.handle(SessionEvent::Navigated(Location::parse("/exams")));

        assert!(effects.is_empty());
        assert_eq!(session.store().active_id(), Some(&second));
    }

    #[test]
    fn given_click_after_navigation_when_handled_then_later_event_wins() {
        let mut session = seeded(&["A", "B", "C"]);
        let b = item_id(&session, 1);
        let c = item_id(&session, 2);

        session.handle(SessionEvent::Navigated(Location::parse(&format!(
            "/exams?tab={b}"
        ))));
        session.handle(SessionEvent::Collection(CollectionIntent::Select {
            id: Some(c.clone()),
        }));

        assert_eq!(session.store().active_id(), Some(&c));
    }

    #[test]
    fn given_blank_seed_names_when_session_started_then_they_are_ignored() {
        let session = seeded(&["  ", "Phần 1"]);

        assert_eq!(session.store().len(), 1);
        assert!(session.vm().has_items);
    }
}
