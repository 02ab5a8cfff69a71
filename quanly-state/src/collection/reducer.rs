use super::event::{CollectionEffect, CollectionIntent};
use super::model::{Item, ItemId, normalize_name};
use super::state::CollectionState;

/// Reduce an intent into state mutation and effect events.
///
/// Rejected intents (blank names, unknown ids, requests that leave the
/// selection unchanged) produce no effects.
pub(crate) fn reduce(
    state: &mut CollectionState,
    intent: CollectionIntent,
) -> Vec<CollectionEffect> {
    match intent {
        CollectionIntent::Add { name } => add(state, &name),
        CollectionIntent::Remove { id } => remove(state, &id),
        CollectionIntent::Rename { id, name } => rename(state, id, &name),
        CollectionIntent::Select { id } => select(state, id.as_ref()),
    }
}

fn add(state: &mut CollectionState, name: &str) -> Vec<CollectionEffect> {
    let Some(name) = normalize_name(name) else {
        return Vec::new();
    };

    let id = state.allocate_id();
    let item = Item::new(id, name);
    state.push(item.clone());

    let mut effects = vec![CollectionEffect::Added { item }];
    push_activation(state, None, &mut effects);
    effects
}

fn remove(state: &mut CollectionState, id: &ItemId) -> Vec<CollectionEffect> {
    let Some(item) = state.remove(id) else {
        return Vec::new();
    };

    let changed = state.resolve_active(None);
    let mut effects = vec![CollectionEffect::Removed {
        item,
        new_active_id: state.active_id().cloned(),
        remaining: state.len(),
    }];
    if changed {
        effects.push(CollectionEffect::Activated {
            active_id: state.active_id().cloned(),
        });
    }
    effects
}

fn rename(
    state: &mut CollectionState,
    id: ItemId,
    name: &str,
) -> Vec<CollectionEffect> {
    let Some(name) = normalize_name(name) else {
        return Vec::new();
    };

    if !state.set_name(&id, name.clone()) {
        return Vec::new();
    }

    vec![CollectionEffect::Renamed { id, name }]
}

fn select(
    state: &mut CollectionState,
    requested: Option<&ItemId>,
) -> Vec<CollectionEffect> {
    let mut effects = Vec::new();
    push_activation(state, requested, &mut effects);
    effects
}

fn push_activation(
    state: &mut CollectionState,
    requested: Option<&ItemId>,
    effects: &mut Vec<CollectionEffect>,
) {
    if state.resolve_active(requested) {
        effects.push(CollectionEffect::Activated {
            active_id: state.active_id().cloned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_named(state: &mut CollectionState, name: &str) -> ItemId {
        let effects = reduce(
            state,
            CollectionIntent::Add {
                name: String::from(name),
            },
        );
        match effects.first() {
            Some(CollectionEffect::Added { item }) => item.id().clone(),
            other => panic!("expected added effect, got {other:?}"),
        }
    }

    #[test]
    fn given_first_add_when_reduced_then_item_becomes_active() {
        let mut state = CollectionState::default();

        let effects = reduce(
            &mut state,
            CollectionIntent::Add {
                name: String::from(" Phần 1 "),
            },
        );

        assert_eq!(effects.len(), 2);
        let id = state.items()[0].id().clone();
        assert_eq!(state.items()[0].name(), "Phần 1");
        assert_eq!(
            effects[1],
            CollectionEffect::Activated {
                active_id: Some(id.clone())
            }
        );
        assert_eq!(state.active_id(), Some(&id));
    }

    #[test]
    fn given_blank_name_when_add_reduced_then_no_effects() {
        let mut state = CollectionState::default();

        let effects = reduce(
            &mut state,
            CollectionIntent::Add {
                name: String::from("   "),
            },
        );

        assert!(effects.is_empty());
        assert!(state.is_empty());
        assert!(state.active_id().is_none());
    }

    #[test]
    fn given_active_middle_item_when_removed_then_first_item_is_activated() {
        let mut state = CollectionState::default();
        let a = add_named(&mut state, "A");
        let b = add_named(&mut state, "B");
        add_named(&mut state, "C");
        let _ = reduce(
            &mut state,
            CollectionIntent::Select {
                id: Some(b.clone()),
            },
        );

        let effects = reduce(&mut state, CollectionIntent::Remove { id: b });

        assert_eq!(state.active_id(), Some(&a));
        match &effects[0] {
            CollectionEffect::Removed {
                new_active_id,
                remaining,
                ..
            } => {
                assert_eq!(new_active_id.as_ref(), Some(&a));
                assert_eq!(*remaining, 2);
            },
            other => panic!("expected removed effect, got {other:?}"),
        }
        assert!(matches!(
            effects.get(1),
            Some(CollectionEffect::Activated { .. })
        ));
    }

    #[test]
    fn given_inactive_item_when_removed_then_selection_is_untouched() {
        let mut state = CollectionState::default();
        let a = add_named(&mut state, "A");
        let b = add_named(&mut state, "B");

        let effects = reduce(&mut state, CollectionIntent::Remove { id: b });

        assert_eq!(effects.len(), 1);
        assert_eq!(state.active_id(), Some(&a));
    }

    #[test]
    fn given_last_item_when_removed_then_selection_is_cleared() {
        let mut state = CollectionState::default();
        let a = add_named(&mut state, "A");

        let _ = reduce(&mut state, CollectionIntent::Remove { id: a });

        assert!(state.is_empty());
        assert!(state.active_id().is_none());
    }

    #[test]
    fn given_unknown_id_when_remove_reduced_then_no_effects() {
        let mut state = CollectionState::default();
        add_named(&mut state, "A");

        let effects = reduce(
            &mut state,
            CollectionIntent::Remove {
                id: ItemId::from("nope"),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn given_existing_item_when_renamed_then_id_and_position_are_kept() {
        let mut state = CollectionState::default();
        let a = add_named(&mut state, "A");
        add_named(&mut state, "B");

        let effects = reduce(
            &mut state,
            CollectionIntent::Rename {
                id: a.clone(),
                name: String::from("  Nghe hiểu "),
            },
        );

        assert_eq!(
            effects,
            vec![CollectionEffect::Renamed {
                id: a.clone(),
                name: String::from("Nghe hiểu"),
            }]
        );
        assert_eq!(state.items()[0].id(), &a);
        assert_eq!(state.items()[0].name(), "Nghe hiểu");
    }

    #[test]
    fn given_current_selection_when_reselected_then_no_effects() {
        let mut state = CollectionState::default();
        let a = add_named(&mut state, "A");

        let effects =
            reduce(&mut state, CollectionIntent::Select { id: Some(a) });

        assert!(effects.is_empty());
    }
}
