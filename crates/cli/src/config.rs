//! Optional JSON configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use geocalc_kernel::ModelConfig;
use geocalc_render::{MIN_HEIGHT, MIN_WIDTH};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::input::InputRule;

/// Size of rendered SVG files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    pub width: f64,
    pub height: f64,
}

impl SvgConfig {
    pub fn check(&self) -> Result<()> {
        ensure!(
            self.width >= MIN_WIDTH && self.height >= MIN_HEIGHT,
            "SVG size {}x{} is too small, minimum is {MIN_WIDTH}x{MIN_HEIGHT}",
            self.width,
            self.height
        );
        Ok(())
    }
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
        }
    }
}

/// Everything the command line can be configured with. Every field has a
/// default, so an empty object is a valid file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub model: ModelConfig,
    /// Rule for real-valued parameters.
    pub input: InputRule,
    pub svg: SvgConfig,
}

impl CliConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config
            .svg
            .check()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
