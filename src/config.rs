use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Site configuration, read from `config.toml` at the site root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of markdown sources, relative to the site root.
    pub content: String,
    /// Directory of static assets copied into the output as-is.
    #[serde(rename = "static")]
    pub static_dir: String,
    /// Output directory; deleted and recreated on every build.
    pub output: String,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: String,
    /// Prefix substituted into root-relative `href`/`src` URLs.
    pub basepath: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            static_dir: "static".to_string(),
            output: "public".to_string(),
            template: "template.html".to_string(),
            basepath: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
