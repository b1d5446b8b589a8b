use std::fs;
use std::path::Path;

use anyhow::Context;
use memorama_core::{GameConfig, ImageId, ImagePool};
use serde::Deserialize;

/// Contents of the `--config` file. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    /// Replaces the bundled `images/1.png`..`images/8.png` pool.
    pub images: Option<Vec<ImageId>>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn image_pool(&self) -> ImagePool {
        match &self.images {
            Some(images) => ImagePool::new(images.clone()),
            None => ImagePool::default(),
        }
    }
}
