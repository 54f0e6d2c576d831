use crate::output::{print_json, print_table};
use confignav_core::config::NavConfig;
use confignav_core::route::{join_base, resolve_str, RouteTable};
use confignav_core::ConfigId;

/// List every tag with its template, or with the concrete URL when an id is given.
pub fn run(config: &NavConfig, config_id: Option<String>, json: bool) -> anyhow::Result<()> {
    let id = config_id.map(ConfigId::from);
    let mut entries = RouteTable::entries();
    for entry in &mut entries {
        if let Some(url) = id.as_ref().and_then(|id| resolve_str(entry.tag.as_str(), id)) {
            entry.template = url;
        }
        entry.template = join_base(config.base_url.as_deref(), &entry.template);
    }

    if json {
        return print_json(&entries);
    }

    let rows = entries
        .into_iter()
        .map(|e| {
            let tag = if e.tag.as_str().is_empty() {
                "''".to_string()
            } else {
                e.tag.to_string()
            };
            vec![tag, e.template]
        })
        .collect();
    print_table(&["TAG", "URL"], rows);
    Ok(())
}
