use crate::output::print_json;
use anyhow::Context;
use confignav_core::config::NavConfig;
use confignav_core::{BrowserNavigator, Dispatch};

pub fn run(
    config: &NavConfig,
    tag: &str,
    config_id: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let dispatcher = super::dispatcher(config, BrowserNavigator);
    let outcome = dispatcher
        .navigate(tag, super::config_id(config_id))
        .with_context(|| format!("cannot open '{tag}'"))?;

    if json {
        print_json(&serde_json::json!({ "tag": tag, "url": outcome.url() }))?;
        return Ok(());
    }
    if let Dispatch::Navigated(url) = outcome {
        println!("Opened {url}");
    }
    Ok(())
}
