use crate::dispatch::UnmatchedPolicy;
use crate::error::{NavError, Result};
use crate::provider::DEFAULT_ID_ENV;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = ".confignav.yaml";

// ---------------------------------------------------------------------------
// NavConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Origin prepended to every resolved path, e.g. `http://cloud-lab:5000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Environment variable holding the default config id.
    #[serde(default = "default_id_env")]
    pub id_env: String,

    /// Treat unknown tags as errors instead of ignoring them.
    #[serde(default)]
    pub strict: bool,
}

fn default_id_env() -> String {
    DEFAULT_ID_ENV.to_string()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            id_env: default_id_env(),
            strict: false,
        }
    }
}

impl NavConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config: NavConfig = serde_yaml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(base) = &self.base_url {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(NavError::InvalidConfig(format!(
                    "base_url must start with http:// or https://, got '{base}'"
                )));
            }
        }
        if self.id_env.trim().is_empty() {
            return Err(NavError::InvalidConfig("id_env must not be empty".into()));
        }
        Ok(())
    }

    pub fn unmatched_policy(&self) -> UnmatchedPolicy {
        if self.strict {
            UnmatchedPolicy::Reject
        } else {
            UnmatchedPolicy::Ignore
        }
    }
}
