//! Drive an exam-part editing session the way the dashboard view does.
//!
//! Run with `RUST_LOG=debug` to see session transitions.

use env_logger::Env;
use quanly_state::menu::{self, match_active};
use quanly_state::settings::{SettingsLoadStatus, load_settings};
use quanly_state::{
    CollectionIntent, EditingSession, Location, LogNotifier, SessionEvent,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let (mut settings, status) = load_settings()?.into_parts();
    if let SettingsLoadStatus::Invalid(message) = &status {
        log::warn!("settings file invalid: {message}");
    }
    if settings.initial_items.is_empty() {
        settings.initial_items = vec![String::from("Phần 1")];
    }

    let notifier = LogNotifier::new(settings.notifications.clone());
    let mut session = EditingSession::new(&settings, notifier);

    for name in ["Nghe hiểu", "Đọc hiểu", "   "] {
        session.handle(SessionEvent::Collection(CollectionIntent::Add {
            name: name.to_owned(),
        }));
    }

    let location = Location::parse("/exams/create?tab=1");
    session.handle(SessionEvent::Navigated(location.clone()));

    if let Some(exams) = menu::section("exams") {
        let active = match_active(exams.entries, location.tab());
        log::info!("exam menu active entry: {active:?}");
    }

    if let Some(active) = session.store().active_item().cloned() {
        session.handle(SessionEvent::Collection(CollectionIntent::Remove {
            id: active.id().clone(),
        }));
    }

    let vm = session.vm();
    for item in &vm.items {
        let marker = if vm.active_id.as_ref() == Some(item.id()) {
            '*'
        } else {
            ' '
        };
        println!("{marker} [{}] {}", item.id(), item.name());
    }

    Ok(())
}
