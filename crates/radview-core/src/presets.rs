use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RadviewError, Result};

/// A named window center/width pair for quick recall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowPreset {
    pub name: String,
    pub level: i32,
    pub width: i32,
}

#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default)]
    preset: Vec<WindowPreset>,
}

/// Presets shipped with the viewer, covering common CT reads.
pub fn builtin_presets() -> Vec<WindowPreset> {
    [
        ("soft-tissue", 40, 400),
        ("lung", -600, 1500),
        ("bone", 400, 1800),
        ("brain", 40, 80),
    ]
    .into_iter()
    .map(|(name, level, width)| WindowPreset {
        name: name.to_string(),
        level,
        width,
    })
    .collect()
}

/// Parse presets from TOML text: `[[preset]]` tables with name/level/width.
pub fn parse_presets(text: &str) -> Result<Vec<WindowPreset>> {
    let file: PresetFile =
        toml::from_str(text).map_err(|e| RadviewError::InvalidPreset(e.to_string()))?;
    Ok(file.preset)
}

/// Load presets from a TOML file.
pub fn load_presets(path: &Path) -> Result<Vec<WindowPreset>> {
    parse_presets(&std::fs::read_to_string(path)?)
}

/// Case-insensitive preset lookup.
pub fn find_preset<'a>(presets: &'a [WindowPreset], name: &str) -> Option<&'a WindowPreset> {
    presets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
