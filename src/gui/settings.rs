use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    Direct,
    File,
}

impl Default for InputMode {
    fn default() -> Self {
        InputMode::Direct
    }
}

/// UI preferences persisted between sessions.
#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub input_mode: InputMode,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, input_mode: InputMode::default() }
    }
}

impl SettingsData {
    pub fn load() -> Self {
        persistence::load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) {
        if let Err(e) = persistence::save_json(self, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
