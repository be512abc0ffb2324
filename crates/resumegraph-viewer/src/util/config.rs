use anyhow::Context;
use directories::ProjectDirs;
use resumegraph_core::{FilterState, LabelMode, LayerSet, ToolFocus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LAYER_GAP_RANGE: std::ops::RangeInclusive<f64> = 1.2..=3.6;
pub const Y_SPREAD_RANGE: std::ops::RangeInclusive<f64> = 1.6..=6.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub label_mode: LabelMode,
    pub layer_gap: f64,
    pub y_spread: f64,
    pub frame_ms: u32,
    pub autoplay: bool,
    // tables last so the TOML stays flat at the top
    pub layers: LayerSet,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let filter = FilterState::default();
        Self {
            label_mode: filter.label_mode,
            layer_gap: filter.layer_gap,
            y_spread: filter.y_spread,
            frame_ms: filter.frame_ms,
            autoplay: false,
            layers: filter.layers,
        }
    }
}

impl ViewerConfig {
    pub fn to_filter(&self) -> FilterState {
        FilterState {
            layers: self.layers,
            tool_focus: ToolFocus::All,
            label_mode: self.label_mode,
            selection: None,
            layer_gap: clamp_to(self.layer_gap, &LAYER_GAP_RANGE),
            y_spread: clamp_to(self.y_spread, &Y_SPREAD_RANGE),
            frame_ms: self.frame_ms.max(1),
        }
    }

    pub fn update_from(&mut self, filter: &FilterState) {
        self.layers = filter.layers;
        self.label_mode = filter.label_mode;
        self.layer_gap = filter.layer_gap;
        self.y_spread = filter.y_spread;
        self.frame_ms = filter.frame_ms;
    }
}

fn clamp_to(v: f64, range: &std::ops::RangeInclusive<f64>) -> f64 {
    if v.is_finite() {
        v.clamp(*range.start(), *range.end())
    } else {
        *range.start()
    }
}

fn config_file_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "resumegraph")?;
    Some(proj.config_dir().join("viewer.toml"))
}

pub fn load_or_default() -> ViewerConfig {
    let Some(path) = config_file_path() else {
        return ViewerConfig::default();
    };
    load_or_default_from_path(&path)
}

fn load_or_default_from_path(path: &Path) -> ViewerConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return ViewerConfig::default();
    };
    toml::from_str(&contents).unwrap_or_else(|_| ViewerConfig::default())
}

pub fn save(cfg: &ViewerConfig) -> anyhow::Result<()> {
    let Some(path) = config_file_path() else {
        return Err(anyhow::anyhow!("no config directory available"));
    };
    save_to_path(cfg, &path)
}

fn save_to_path(cfg: &ViewerConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(cfg).context("failed to serialize viewer config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write viewer config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn viewer_config_roundtrip_save_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("viewer.toml");
        let mut cfg = ViewerConfig::default();
        cfg.layers.tags = true;
        cfg.label_mode = LabelMode::All;

        save_to_path(&cfg, &path).expect("save config");
        let loaded = load_or_default_from_path(&path);

        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_or_broken_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("viewer.toml");
        assert_eq!(load_or_default_from_path(&path), ViewerConfig::default());

        fs::write(&path, "layer_gap = \"wide\"").expect("write");
        assert_eq!(load_or_default_from_path(&path), ViewerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let partial = r#"
label_mode = "none"

[layers]
leadership = true
"#;
        let cfg: ViewerConfig = toml::from_str(partial).expect("parse partial");
        assert_eq!(cfg.label_mode, LabelMode::None);
        assert!(cfg.layers.leadership);
        assert!(cfg.layers.projects, "unspecified layers keep defaults");
        assert_eq!(cfg.frame_ms, 560);
    }

    #[test]
    fn filter_clamps_spacing() {
        let cfg = ViewerConfig {
            layer_gap: 40.0,
            y_spread: f64::NAN,
            ..ViewerConfig::default()
        };
        let filter = cfg.to_filter();
        assert_eq!(filter.layer_gap, 3.6);
        assert_eq!(filter.y_spread, 1.6);
    }
}
