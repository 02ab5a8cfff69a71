use serde::{Deserialize, Serialize};

use crate::notify::{Notification, NotificationKind};

const NAME_PLACEHOLDER: &str = "{name}";

/// Persisted dashboard settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub notifications: NotificationSettings,
    /// Names seeded into every new editing session, in order.
    pub initial_items: Vec<String>,
}

/// Confirmation toggles and message templates.
///
/// Templates may contain a `{name}` placeholder replaced by the item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub added: String,
    pub removed: String,
    pub renamed: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            added: String::from("Đã thêm \"{name}\" thành công"),
            removed: String::from("Đã xóa \"{name}\" thành công"),
            renamed: String::from("Đã đổi tên thành \"{name}\""),
        }
    }
}

impl NotificationSettings {
    /// Return the template configured for a notification kind.
    pub fn template(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Added => &self.added,
            NotificationKind::Removed => &self.removed,
            NotificationKind::Renamed => &self.renamed,
        }
    }

    /// Render the user-facing message, or `None` when notifications are off.
    pub fn render(&self, notification: &Notification) -> Option<String> {
        if !self.enabled {
            return None;
        }

        Some(
            self.template(notification.kind)
                .replace(NAME_PLACEHOLDER, &notification.name),
        )
    }
}

impl SettingsData {
    /// Return seed names with blank entries removed and whitespace trimmed.
    pub fn normalized_initial_items(&self) -> Vec<String> {
        self.initial_items
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationSettings, SettingsData};
    use crate::notify::{Notification, NotificationKind};

    #[test]
    fn given_default_templates_when_rendered_then_name_is_substituted() {
        let settings = NotificationSettings::default();

        let message = settings
            .render(&Notification::new(NotificationKind::Added, "Phần 2"))
            .expect("notifications should be enabled by default");

        assert_eq!(message, "Đã thêm \"Phần 2\" thành công");
    }

    #[test]
    fn given_disabled_notifications_when_rendered_then_nothing_is_produced() {
        let settings = NotificationSettings {
            enabled: false,
            ..NotificationSettings::default()
        };

        let rendered = settings
            .render(&Notification::new(NotificationKind::Removed, "Phần 1"));

        assert!(rendered.is_none());
    }

    #[test]
    fn given_partial_json_when_deserialized_then_missing_fields_use_defaults() {
        let settings: SettingsData = serde_json::from_str(
            r#"{ "notifications": { "enabled": false } }"#,
        )
        .expect("partial settings should deserialize");

        assert!(!settings.notifications.enabled);
        assert_eq!(
            settings.notifications.added,
            NotificationSettings::default().added
        );
        assert!(settings.initial_items.is_empty());
    }

    #[test]
    fn given_blank_seed_names_when_normalized_then_they_are_dropped() {
        let settings = SettingsData {
            initial_items: vec![
                String::from(" Phần 1 "),
                String::from("   "),
                String::from("Phần 2"),
            ],
            ..SettingsData::default()
        };

        assert_eq!(
            settings.normalized_initial_items(),
            vec![String::from("Phần 1"), String::from("Phần 2")]
        );
    }
}
