use crate::Result;
use serde::{Deserialize, Serialize};
use sessionkit_store::ExcerptRules;
use sessionkit_types::DEFAULT_RECAP_HEADER;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecapConfig {
    /// Prompts this short or shorter are treated as acknowledgements
    #[serde(default = "default_short_cutoff")]
    pub short_cutoff: usize,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default)]
    pub prompt_header: Option<String>,
}

fn default_short_cutoff() -> usize {
    ExcerptRules::default().short_cutoff
}

fn default_max_chars() -> usize {
    ExcerptRules::default().max_chars
}

impl Default for RecapConfig {
    fn default() -> Self {
        Self {
            short_cutoff: default_short_cutoff(),
            max_chars: default_max_chars(),
            prompt_header: None,
        }
    }
}

impl RecapConfig {
    pub fn rules(&self) -> ExcerptRules {
        ExcerptRules {
            short_cutoff: self.short_cutoff,
            max_chars: self.max_chars,
        }
    }

    pub fn header(&self) -> &str {
        self.prompt_header.as_deref().unwrap_or(DEFAULT_RECAP_HEADER)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Session store root; `~` is expanded
    #[serde(default)]
    pub store_root: Option<String>,
    #[serde(default)]
    pub recap: RecapConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        match sessionkit_core::default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Store root with flag > env > config file > default precedence
    pub fn resolve_store_root(&self, explicit: Option<&str>) -> Result<PathBuf> {
        if explicit.is_none()
            && std::env::var_os(sessionkit_core::STORE_ENV).is_none()
            && let Some(root) = &self.store_root
        {
            return Ok(sessionkit_core::expand_tilde(root));
        }
        Ok(sessionkit_core::resolve_store_root(explicit)?)
    }
}
