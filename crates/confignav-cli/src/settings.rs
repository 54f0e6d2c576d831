use anyhow::{bail, Context};
use confignav_core::config::{NavConfig, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Locate the config file.
///
/// Priority:
/// 1. `--config` flag / `CONFIGNAV_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.confignav.yaml`
/// 3. `None`: run on defaults
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    let mut dir = cwd.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => return None,
        }
    }
}

/// Load the config file (if any) and apply command-line overrides.
///
/// Only a discovered file may be absent; an explicit path must exist.
pub fn load(
    explicit: Option<&Path>,
    base_url: Option<String>,
    strict: bool,
) -> anyhow::Result<NavConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("settings file not found: {}", path.display());
        }
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = match find_config(explicit, &cwd) {
        Some(path) => NavConfig::load(&path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => NavConfig::default(),
    };

    if base_url.is_some() {
        config.base_url = base_url;
    }
    if strict {
        config.strict = true;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}
