use anyhow::Context;
use mazewalk_author::SessionConfig;
use mazewalk_input::KeyBindings;
use mazewalk_kernel::MazeConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level YAML config. Every section is optional.
///
/// ```yaml
/// maze:
///   size: 31
///   seed: 7
///   plaza_radius: 3
///   clear_mode: clamped
/// session:
///   collide: true
/// bindings:
///   w: move_forward
///   x: place_block
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub maze: MazeConfig,
    pub session: SessionConfig,
    pub bindings: KeyBindings,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
