//! Configuration for the wardrobe layout editor.
//!
//! The config is a KDL document. Every node is optional; a missing file or an empty document
//! yields the built-in defaults.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use miette::{Context, IntoDiagnostic};
use tracing::debug;

pub mod generator;
pub mod interaction;
pub mod layout;
pub mod utils;

pub use crate::generator::{Command, Generator};
pub use crate::interaction::Interaction;
pub use crate::layout::{ItemDefaults, Layout};
pub use crate::utils::FloatOrInt;

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub layout: Layout,
    #[knuffel(child, default)]
    pub item_defaults: ItemDefaults,
    #[knuffel(child, default)]
    pub interaction: Interaction,
    #[knuffel(child, default)]
    pub generator: Generator,
}

impl Config {
    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        knuffel::parse(filename, text)
    }

    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("config.kdl");
        let config = Self::parse(filename, &contents).context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    /// Loads the config from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing file at the default location is not an error.
    pub fn load_or_default(path: Option<&Path>) -> miette::Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `$XDG_CONFIG_HOME/wardrobe/config.kdl` or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "wardrobe")?;
    Some(dirs.config_dir().join("config.kdl"))
}
