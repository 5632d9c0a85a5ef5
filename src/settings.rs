//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web build.

use serde::{Deserialize, Serialize};

use crate::platform::input::Key;

/// Keyboard bindings, by `KeyboardEvent.key` name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["a".into(), "A".into(), "ArrowLeft".into()],
            move_right: vec!["d".into(), "D".into(), "ArrowRight".into()],
        }
    }
}

impl KeyBindings {
    /// Map a key name to a logical key, if bound
    pub fn resolve(&self, name: &str) -> Option<Key> {
        if self.move_left.iter().any(|k| k == name) {
            Some(Key::MoveLeft)
        } else if self.move_right.iter().any(|k| k == name) {
            Some(Key::MoveRight)
        } else {
            None
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Movement key bindings
    pub key_bindings: KeyBindings,
    /// Let the autopilot play
    pub demo_mode: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rainy_day_settings";

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.resolve("a"), Some(Key::MoveLeft));
        assert_eq!(bindings.resolve("A"), Some(Key::MoveLeft));
        assert_eq!(bindings.resolve("ArrowLeft"), Some(Key::MoveLeft));
        assert_eq!(bindings.resolve("d"), Some(Key::MoveRight));
        assert_eq!(bindings.resolve("ArrowRight"), Some(Key::MoveRight));
        assert_eq!(bindings.resolve("w"), None);
        assert_eq!(bindings.resolve(" "), None);
    }

    #[test]
    fn test_from_json_rebinds_keys() {
        let json = r#"{ "key_bindings": { "move_left": ["j"], "move_right": ["l"] } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.key_bindings.resolve("j"), Some(Key::MoveLeft));
        assert_eq!(settings.key_bindings.resolve("a"), None);
        assert!(!settings.demo_mode);
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings.key_bindings, KeyBindings::default());
        assert!(!settings.show_fps);
    }

    #[test]
    fn test_native_load_is_default() {
        let settings = Settings::load();
        assert!(!settings.demo_mode);
        settings.save();
    }
}
