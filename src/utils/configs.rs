use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use super::log::{log, LogLevel};
use crate::error::BuildError;

/// Settings file looked up in the working directory
pub static LOCAL_CONFIG: &str = "./topaz_build.toml";

/// Struct describing how the configure step is invoked
///
/// Every key is optional in the toml file:
/// ```toml
/// # topaz_build.toml
/// cmake = "cmake"
/// build_root = "build"
/// source_dir = "."
/// config_define = "TOPAZ_BUILDCONFIG"
/// render_api_define = "TOPAZ_RENDERAPI"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub cmake: String,
    pub build_root: String,
    pub source_dir: String,
    pub config_define: String,
    pub render_api_define: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            cmake: "cmake".to_string(),
            build_root: "build".to_string(),
            source_dir: ".".to_string(),
            config_define: "TOPAZ_BUILDCONFIG".to_string(),
            render_api_define: "TOPAZ_RENDERAPI".to_string(),
        }
    }
}

impl ToolConfig {
    /// Parses settings from toml text
    /// # Arguments
    /// * `contents` - The toml text
    /// * `origin` - Where the text came from, used in errors
    pub fn from_toml(contents: &str, origin: &str) -> Result<Self, BuildError> {
        toml::from_str(contents).map_err(|source| BuildError::Config {
            path: origin.to_string(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, BuildError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents, &path.display().to_string())
    }

    /// Per-user settings file, if the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "topaz_build").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Finds and loads settings
    /// # Arguments
    /// * `explicit` - Path given on the command line, must exist when set
    ///
    /// Otherwise tries `./topaz_build.toml`, then the per-user file,
    /// then falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, BuildError> {
        if let Some(path) = explicit {
            log(LogLevel::Debug, &format!("Settings: {}", path.display()));
            return Self::from_file(path);
        }
        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG)).chain(Self::user_config_path());
        for path in candidates {
            if path.is_file() {
                log(LogLevel::Debug, &format!("Settings: {}", path.display()));
                return Self::from_file(&path);
            }
        }
        log(LogLevel::Debug, "Settings: built-in defaults");
        Ok(ToolConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(ToolConfig::from_toml("", "inline").unwrap(), ToolConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ToolConfig::from_toml("cmake = \"cmake3\"\nbuild_root = \"out\"\n", "inline").unwrap();
        assert_eq!(config.cmake, "cmake3");
        assert_eq!(config.build_root, "out");
        assert_eq!(config.source_dir, ".");
        assert_eq!(config.config_define, "TOPAZ_BUILDCONFIG");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        match ToolConfig::from_toml("compiler = \"g++\"\n", "inline") {
            Err(BuildError::Config { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn explicit_path_must_exist() {
        let missing = Path::new("./definitely/not/here/topaz_build.toml");
        assert!(matches!(ToolConfig::load(Some(missing)), Err(BuildError::Io(_))));
    }

    #[test]
    fn explicit_path_is_read() {
        let path = std::env::temp_dir().join(format!("topaz_build_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "source_dir = \"engine\"\n").unwrap();
        let config = ToolConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.source_dir, "engine");
    }
}
