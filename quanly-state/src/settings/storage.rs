use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

const APP_DIR: &str = "quanly";
const SETTINGS_FILE: &str = "settings.json";

/// How the settings payload was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLoadStatus {
    Loaded,
    Missing,
    /// The file exists but is not valid JSON for [`SettingsData`].
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    fn new(settings: SettingsData, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    pub fn status(&self) -> &SettingsLoadStatus {
        &self.status
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

/// Load settings from the per-user config location.
pub fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Persist settings to the per-user config location.
pub fn save_settings(settings: &SettingsData) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

/// Load settings from an explicit file.
///
/// A missing or unparseable file is not an error: defaults are returned and
/// the status says why.
pub fn load_settings_from_path(
    path: &Path,
) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(SettingsError::io(path, err)),
    };

    match serde_json::from_str::<SettingsData>(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

/// Write settings to an explicit file, creating parent directories.
pub fn save_settings_to_path(
    path: &Path,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|err| SettingsError::io(dir, err))?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    write_atomic(path, payload.as_bytes())
        .map_err(|err| SettingsError::io(path, err))
}

/// Return the settings file location for the current user.
pub fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(APP_DIR)
            .join(SETTINGS_FILE);
    }

    std::env::temp_dir().join(APP_DIR).join(SETTINGS_FILE)
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)
}
