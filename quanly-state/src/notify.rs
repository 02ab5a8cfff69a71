//! User-facing notification channel.

use std::fmt;

use crate::settings::NotificationSettings;

/// Kind of a successful collection mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Added,
    Removed,
    Renamed,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationKind::Added => "added",
            NotificationKind::Removed => "removed",
            NotificationKind::Renamed => "renamed",
        };
        write!(f, "{label}")
    }
}

/// Confirmation emitted after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Display name of the affected item (the new name for renames).
    pub name: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Observer invoked with confirmations.
///
/// Delivery is fire-and-forget: the store never inspects the outcome and
/// callers must not rely on delivery having completed before the next state
/// read.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Notifier that drops every confirmation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: &Notification) {}
}

/// Notifier that renders confirmations with configured templates and emits
/// them through the `log` facade.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    settings: NotificationSettings,
}

impl LogNotifier {
    pub fn new(settings: NotificationSettings) -> Self {
        Self { settings }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        if let Some(message) = self.settings.render(notification) {
            log::info!("{message}");
        }
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification);
    }
}

impl<T: Notifier + ?Sized> Notifier for std::rc::Rc<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification);
    }
}
