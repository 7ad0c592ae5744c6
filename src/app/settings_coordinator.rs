//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! This module follows the same pattern as ThemeCoordinator but is designed
//! to be generic and extensible for any serializable settings. Settings are
//! stored as JSON strings.

use serde::{Deserialize, Serialize};

/// Storage key for the reduce-motion preference.
pub const MOTION_KEY: &str = "motion_enabled";

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Examples
    /// ```ignore
    /// let motion: bool = SettingsCoordinator::load_setting_or(
    ///     storage,
    ///     MOTION_KEY,
    ///     true,
    /// );
    /// ```
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_motion_preference() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, MOTION_KEY, &false);

        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), MOTION_KEY, true);
        assert!(!loaded);
    }

    #[test]
    fn test_load_with_custom_default() {
        let storage = MockStorage::new();

        // Missing key falls back to the provided default.
        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "missing", true);
        assert!(loaded);
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::new();

        let result: Option<bool> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, "test", &true);
        let result: Option<bool> = SettingsCoordinator::try_load_setting(Some(&storage), "test");
        assert_eq!(result, Some(true));
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string(MOTION_KEY, "not json".to_string());

        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), MOTION_KEY, true);
        assert!(loaded);
    }
}
