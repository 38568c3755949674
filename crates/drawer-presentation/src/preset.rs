//! TOML presets bundling a drawer's behaviour with its transition timing.
//!
//! Every table uses `#[serde(default)]`, so a preset that only overrides
//! `[timing]` or a couple of `[drawer]` keys loads with defaults elsewhere.
//! Loading always validates.

use std::path::Path;

use drawer_animation::TransitionTiming;
use drawer_core::{ConfigError, DrawerConfiguration};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preset could not be parsed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("preset could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("preset is invalid: {0}")]
    Invalid(#[from] ConfigError),
}

/// Everything a presentation needs besides the host's layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PresentationConfiguration {
    pub drawer: DrawerConfiguration,
    pub timing: TransitionTiming,
}

impl PresentationConfiguration {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.drawer.validate()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PresetError> {
        let configuration: Self = toml::from_str(content)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn to_toml_string(&self) -> Result<String, PresetError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads and validates a preset file.
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        let configuration = Self::from_toml_str(&content)?;
        log::debug!("loaded drawer preset from {}", path.display());
        Ok(configuration)
    }

    /// Writes the preset as pretty-printed TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), PresetError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawer_animation::Easing;
    use drawer_core::FullExpansionBehaviour;

    #[test]
    fn default_round_trips_through_toml() {
        let configuration = PresentationConfiguration::default();
        let content = configuration.to_toml_string().unwrap();
        let parsed = PresentationConfiguration::from_toml_str(&content).unwrap();
        assert_eq!(configuration, parsed);
    }

    #[test]
    fn partial_preset_fills_defaults() {
        let configuration = PresentationConfiguration::from_toml_str(
            r#"
[drawer]
supports_partial_expansion = false
flick_speed_threshold = 0.0

[timing]
duration_millis = 250
easing = "linear"
"#,
        )
        .unwrap();

        assert!(!configuration.drawer.supports_partial_expansion);
        assert_eq!(configuration.drawer.flick_speed_threshold, 0.0);
        assert_eq!(configuration.drawer.upper_mark_gap, 40.0);
        assert_eq!(configuration.timing.duration_millis, 250);
        assert_eq!(configuration.timing.easing, Easing::Linear);
        assert!(configuration.timing.duration_is_proportional_to_distance);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = PresentationConfiguration::from_toml_str(
            r#"
[drawer]
upper_mark_gap = -4.0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, PresetError::Invalid(_)), "{err}");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PresentationConfiguration::from_toml_str("[drawer\nfoo = ").unwrap_err();
        assert!(matches!(err, PresetError::Parse(_)), "{err}");
    }

    #[test]
    fn save_and_load_preserve_custom_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("sheet.toml");

        let mut configuration = PresentationConfiguration::default();
        configuration.drawer.full_expansion = FullExpansionBehaviour::LeavesCustomGap(64.0);
        configuration.drawer.dismisses_in_stages = true;
        configuration.timing.duration_millis = 320;

        configuration.save(&path).unwrap();
        let loaded = PresentationConfiguration::load(&path).unwrap();
        assert_eq!(loaded, configuration);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PresentationConfiguration::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PresetError::Io(_)));
    }
}
