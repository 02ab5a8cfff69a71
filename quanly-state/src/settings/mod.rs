mod errors;
mod model;
mod storage;

pub use errors::SettingsError;
pub use model::{NotificationSettings, SettingsData};
pub use storage::{
    SettingsLoad, SettingsLoadStatus, load_settings, load_settings_from_path,
    save_settings, save_settings_to_path, settings_path,
};
