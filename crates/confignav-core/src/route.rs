use crate::types::{ConfigId, RouteTag};
use serde::Serialize;

pub const CONFIGS_PREFIX: &str = "/configs";

/// Placeholder used when a template is rendered without a concrete id.
pub const ID_PLACEHOLDER: &str = "{id}";

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Compute the page path for `tag`, with `id` substituted as is.
pub fn resolve(tag: RouteTag, id: &ConfigId) -> String {
    render(tag, id.as_str())
}

/// String-tag variant of [`resolve`]. `None` when the tag is not known.
pub fn resolve_str(tag: &str, id: &ConfigId) -> Option<String> {
    RouteTag::parse(tag).map(|t| resolve(t, id))
}

fn render(tag: RouteTag, id: &str) -> String {
    match tag.suffix() {
        None => format!("{CONFIGS_PREFIX}/{id}"),
        Some(suffix) => format!("{CONFIGS_PREFIX}/{id}/{suffix}"),
    }
}

/// Prefix `path` with an origin such as `http://cloud-lab:5000`.
pub fn join_base(base: Option<&str>, path: &str) -> String {
    match base.map(|b| b.trim_end_matches('/')) {
        Some(b) if !b.is_empty() => format!("{b}{path}"),
        _ => path.to_string(),
    }
}

// ---------------------------------------------------------------------------
// RouteTable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub tag: RouteTag,
    pub template: String,
}

/// Listing view over the tag → template mapping.
pub struct RouteTable;

impl RouteTable {
    pub fn entries() -> Vec<RouteEntry> {
        RouteTag::all()
            .iter()
            .map(|&tag| RouteEntry {
                tag,
                template: render(tag, ID_PLACEHOLDER),
            })
            .collect()
    }
}
