// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

pub const APP_NAME: &str = "joker";
pub const CONFIG_ENV: &str = "JOKER_CONFIG";

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub output_format: OutputFormat,
    pub strict: bool,
    pub quiet: bool,
}

impl Settings {
    /// Returns a loader starting with the embedded defaults followed by the given files.
    pub fn at<I, P>(paths: I) -> Loader
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Loader {
            paths: paths.into_iter().map(Into::into).collect(),
            user: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::at(Vec::<PathBuf>::new()).load().unwrap()
    }
}

// ---

/// Layered settings source.
///
/// Sources are applied in order: embedded defaults, optional user
/// configuration file, then explicitly requested files which must exist.
pub struct Loader {
    paths: Vec<PathBuf>,
    user: Option<PathBuf>,
}

impl Loader {
    /// Adds the optional user configuration file.
    pub fn user(mut self, path: Option<PathBuf>) -> Self {
        self.user = path;
        self
    }

    /// Adds the user configuration file from the environment or the default location.
    pub fn user_default(self) -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .filter(|x| !x.is_empty())
            .map(PathBuf::from)
            .or_else(default_user_config);
        self.user(path)
    }

    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        if let Some(path) = &self.user {
            log::debug!("user configuration file: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        for path in &self.paths {
            log::debug!("configuration file: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

fn default_user_config() -> Option<PathBuf> {
    Some(config_dir()?.join(APP_NAME).join("config.yaml"))
}

#[cfg(target_os = "macos")]
fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .and_then(dirs_sys::is_absolute_path)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

#[cfg(not(target_os = "macos"))]
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

// ---

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Debug,
    Pattern,
    Json,
}
