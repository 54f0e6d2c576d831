use confignav_core::config::NavConfig;
use confignav_core::{ConfigId, MemoryNavigator, RouteDispatcher, UnmatchedPolicy};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSettings {
    pub base_url: Option<String>,
    pub unmatched: UnmatchedPolicy,
}

impl From<&NavConfig> for ServerSettings {
    fn from(config: &NavConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            unmatched: config.unmatched_policy(),
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<ServerSettings>,
}

impl AppState {
    pub fn new(settings: ServerSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Per-request dispatcher. The submitted `config_id` field plays the
    /// role of the id source; the navigator captures the redirect target.
    pub fn dispatcher(
        &self,
        config_id: Option<String>,
    ) -> RouteDispatcher<MemoryNavigator, impl Fn() -> Option<ConfigId>> {
        RouteDispatcher::new(MemoryNavigator::new(), move || {
            config_id.clone().map(ConfigId::from)
        })
        .with_base_url(self.settings.base_url.clone())
        .with_unmatched(self.settings.unmatched)
    }
}
