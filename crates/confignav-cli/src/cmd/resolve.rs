use crate::output::print_json;
use anyhow::Context;
use confignav_core::config::NavConfig;
use confignav_core::MemoryNavigator;

pub fn run(
    config: &NavConfig,
    tag: &str,
    config_id: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let dispatcher = super::dispatcher(config, MemoryNavigator::new());
    let url = dispatcher
        .resolve(tag, super::config_id(config_id))
        .with_context(|| format!("cannot resolve '{tag}'"))?;

    if json {
        print_json(&serde_json::json!({ "tag": tag, "url": url }))?;
    } else if let Some(url) = url {
        println!("{url}");
    }
    Ok(())
}
