use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::screen_flow::{FlowTimings, MAX_CUE_DELAY};

/// How the main screen's navigation bar is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavLayout {
    /// Section segmented control above the command button row.
    #[default]
    Segmented,
    /// Command buttons only.
    ButtonRow,
}

/// Application settings, persisted to `<config_dir>/devclub/settings.json`.
///
/// The `#[serde(default)]` on the struct ensures that any fields missing from
/// an existing settings file are filled in with their `Default` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Window ───────────────────────────────────────────────────────────
    pub window_width: i32,
    pub window_height: i32,
    pub nav_layout: NavLayout,

    // ── Appearance ───────────────────────────────────────────────────────
    /// `"system"`, `"light"` or `"dark"`.
    pub color_scheme: String,

    // ── Web view ─────────────────────────────────────────────────────────
    pub javascript_enabled: bool,
    pub developer_extras: bool,

    // ── Launch screen ────────────────────────────────────────────────────
    pub title_delay_ms: u64,
    pub title_fade_ms: u64,
    pub hold_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            // Window
            window_width: 1024,
            window_height: 768,
            nav_layout: NavLayout::Segmented,

            // Appearance
            color_scheme: String::from("system"),

            // Web view
            javascript_enabled: true,
            developer_extras: false,

            // Launch screen
            title_delay_ms: 500,
            title_fade_ms: 800,
            hold_ms: 1000,
        }
    }
}

impl Settings {
    /// Splash pacing. Each value is capped at [`MAX_CUE_DELAY`].
    pub fn flow_timings(&self) -> FlowTimings {
        FlowTimings {
            title_delay: pacing(self.title_delay_ms),
            title_fade: pacing(self.title_fade_ms),
            hold: pacing(self.hold_ms),
        }
    }
}

fn pacing(ms: u64) -> Duration {
    Duration::from_millis(ms).min(MAX_CUE_DELAY)
}

pub fn settings_path() -> Result<PathBuf, String> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| "Could not determine config directory".to_string())?;
    Ok(config_dir.join("devclub").join("settings.json"))
}

/// Load settings from the default location. Missing or unreadable files
/// yield defaults.
pub fn load() -> Settings {
    match settings_path() {
        Ok(path) => load_from(&path),
        Err(e) => {
            log::warn!("{}; using default settings", e);
            Settings::default()
        }
    }
}

pub fn load_from(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            return Settings::default();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

pub fn save(settings: &Settings) {
    let result = settings_path().and_then(|path| save_to(settings, &path));
    if let Err(e) = result {
        log::warn!("Failed to save settings: {}", e);
    }
}

pub fn save_to(settings: &Settings, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            window_width: 1280,
            nav_layout: NavLayout::ButtonRow,
            color_scheme: "dark".to_string(),
            ..Settings::default()
        };
        save_to(&settings, &path).unwrap();
        assert_eq!(load_from(&path), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "window_height": 600, "nav_layout": "button-row" }"#).unwrap();
        let settings = load_from(&path);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.nav_layout, NavLayout::ButtonRow);
        assert_eq!(settings.window_width, 1024);
        assert!(settings.javascript_enabled);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn default_flow_timings_match_launch_sequence() {
        let timings = Settings::default().flow_timings();
        assert_eq!(timings, FlowTimings::default());
        assert_eq!(timings.total(), Duration::from_millis(2300));
    }

    #[test]
    fn oversized_pacing_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            format!(r#"{{ "title_delay_ms": {}, "hold_ms": 4294967296 }}"#, u64::MAX),
        )
        .unwrap();
        let timings = load_from(&path).flow_timings();
        assert_eq!(timings.title_delay, MAX_CUE_DELAY);
        assert_eq!(timings.hold, MAX_CUE_DELAY);
        assert_eq!(timings.title_fade, Duration::from_millis(800));
    }
}
