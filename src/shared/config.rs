use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;

/// Top-level configuration for gh-comments.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub endpoints and the repository hosting comment threads.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Rendering settings for the comments section.
    #[serde(default)]
    pub render: RenderConfig,
}

/// GitHub API configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    /// REST API root (default: "https://api.github.com").
    #[serde(default = "default_api_root")]
    #[schemars(default = "default_api_root")]
    pub api_root: String,

    /// Web root used for links to the issue page (default: "https://github.com").
    #[serde(default = "default_site_root")]
    #[schemars(default = "default_site_root")]
    pub site_root: String,

    /// Repository holding one issue per commentable page ("owner/repo").
    #[serde(default)]
    pub repo: Option<String>,

    /// Media type requested for issues and comments.
    #[serde(default = "default_accept")]
    #[schemars(default = "default_accept")]
    pub accept: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            site_root: default_site_root(),
            repo: None,
            accept: default_accept(),
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Text of the call-to-action link shown above the first page.
    #[serde(default = "default_cta_text")]
    #[schemars(default = "default_cta_text")]
    pub cta_text: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cta_text: default_cta_text(),
        }
    }
}

fn default_api_root() -> String {
    "https://api.github.com".to_string()
}

fn default_site_root() -> String {
    "https://github.com".to_string()
}

fn default_accept() -> String {
    "application/vnd.github.v3.html+json".to_string()
}

fn default_cta_text() -> String {
    "Post a comment on Github".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from ~/.config/gh-comments/config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = super::dirs::config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir.join("gh-comments"))
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
