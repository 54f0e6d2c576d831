pub mod init;
pub mod open;
pub mod resolve;
pub mod routes;
pub mod serve;

use confignav_core::config::NavConfig;
use confignav_core::{ConfigId, EnvIdProvider, Navigator, RouteDispatcher};

/// Dispatcher wired to the configured id variable, base URL and policy.
pub fn dispatcher<N: Navigator>(
    config: &NavConfig,
    navigator: N,
) -> RouteDispatcher<N, EnvIdProvider> {
    RouteDispatcher::new(navigator, EnvIdProvider::new(config.id_env.clone()))
        .with_base_url(config.base_url.clone())
        .with_unmatched(config.unmatched_policy())
}

pub fn config_id(raw: Option<String>) -> Option<ConfigId> {
    raw.map(ConfigId::from)
}
