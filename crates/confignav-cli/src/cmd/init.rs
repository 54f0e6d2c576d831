use anyhow::{bail, Context};
use confignav_core::config::NavConfig;
use std::path::Path;

/// Write a settings file at `target` holding the given overrides.
pub fn run(target: &Path, base_url: Option<String>, strict: bool, force: bool) -> anyhow::Result<()> {
    if target.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    let config = NavConfig {
        base_url,
        strict,
        ..NavConfig::default()
    };
    config.validate().context("invalid settings")?;
    config
        .save(target)
        .with_context(|| format!("failed to write {}", target.display()))?;

    println!("Wrote {}", target.display());
    Ok(())
}
