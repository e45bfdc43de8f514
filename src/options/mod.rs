//! Centralized animation options with TOML preset support.
//!
//! All tweakable settings (page dimensions, curl shape, page-step pacing,
//! book layout) are consolidated here. Options serialize to/from TOML so a
//! host can ship presets next to its page manifest.

mod book;
mod curl;
mod layout;
mod sequencer;

use std::path::Path;

pub use book::BookOptions;
pub use curl::CurlOptions;
pub use layout::{DeviceLayout, LayoutOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sequencer::SequencerOptions;

use crate::error::FolioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[curl]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Page dimensions and chain resolution.
    pub book: BookOptions,
    /// Page curl shape and smoothing.
    pub curl: CurlOptions,
    /// Page-step pacing.
    pub sequencer: SequencerOptions,
    /// Book pose per device class.
    #[schemars(skip)]
    pub layout: LayoutOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string and validate them.
    pub fn from_toml(content: &str) -> Result<Self, FolioError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(FolioError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FolioError::Io)?;
        }
        std::fs::write(path, content).map_err(FolioError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the animation cannot run with.
    pub fn validate(&self) -> Result<(), FolioError> {
        let invalid = |msg: &str| Err(FolioError::InvalidOptions(msg.to_owned()));

        let b = &self.book;
        let dims = [b.page_width, b.page_height, b.page_depth];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return invalid("page dimensions must be positive");
        }
        if b.page_segments == 0 || b.height_segments == 0 {
            return invalid("segment counts must be at least 1");
        }
        if b.page_segments >= usize::from(u16::MAX) {
            return invalid("page_segments exceeds the skin index range");
        }

        let c = &self.curl;
        if c.turn_duration_ms == 0 {
            return invalid("turn_duration_ms must be positive");
        }
        if c.bend_smoothing <= 0.0 || c.fold_smoothing <= 0.0 {
            return invalid("smoothing times must be positive");
        }

        let s = &self.sequencer;
        if s.fast_step_ms > s.slow_step_ms {
            return invalid("fast_step_ms must not exceed slow_step_ms");
        }

        let l = &self.layout;
        if l.mobile_breakpoint >= l.tablet_breakpoint {
            return invalid("breakpoints must increase");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[curl]
bend_smoothing = 0.4
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.curl.bend_smoothing, 0.4);
        // Everything else should be default
        assert_eq!(opts.curl.fold_smoothing, 0.3);
        assert_eq!(opts.book.page_segments, 30);
        assert_eq!(opts.sequencer.fast_step_ms, 50);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn rejects_fast_step_slower_than_slow_step() {
        let toml_str = r"
[sequencer]
fast_step_ms = 300
slow_step_ms = 100
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, FolioError::InvalidOptions(_)));
    }

    #[test]
    fn rejects_zero_segments() {
        let mut opts = Options::default();
        opts.book.page_segments = 0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Options::from_toml("[book\npage_width = ").unwrap_err();
        assert!(matches!(err, FolioError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("folio-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.curl.page_stagger_deg = 1.5;
        opts.save(&dir.join("fanned.toml")).unwrap();

        let loaded = Options::load(&dir.join("fanned.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["fanned".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("book"));
        assert!(props.contains_key("curl"));
        assert!(props.contains_key("sequencer"));
        assert!(!props.contains_key("layout"));

        let curl = &props["curl"]["properties"];
        assert!(curl.get("bend_smoothing").is_some());
        assert!(curl.get("spine_joints").is_none());
        assert!(curl.get("turn_easing").is_none());
    }
}
