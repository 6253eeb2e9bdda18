//! User preferences.
//!
//! Built-in defaults are embedded from `default.yaml`. A user file, if any, is
//! layered on top of them, so it only needs to contain the values it changes.

#![allow(missing_docs)] // field names are self-explanatory

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};

mod animation;
mod interaction;
mod keybinds;

pub use animation::*;
pub use interaction::*;
pub use keybinds::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub keybinds: KeybindPreferences,
    pub scramble: ScramblePreferences,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}
impl Preferences {
    /// Loads preferences from `user_file` layered over the defaults. If
    /// loading fails, the default preferences are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        let mut config = default_config();
        if let Some(path) = user_file {
            config = config.add_source(config::File::from(path).required(false));
        }
        Self::build(config).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            Self::default()
        })
    }

    /// Loads preferences from a YAML string layered over the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Self::build(default_config().add_source(config::File::from_str(s, PREFS_FILE_FORMAT)))
    }

    fn build(config: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        Ok(config.build()?.try_deserialize()?)
    }

    /// Saves preferences to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}

fn default_config() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder().add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT))
}
