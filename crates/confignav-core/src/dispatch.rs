use crate::error::{NavError, Result};
use crate::navigator::Navigator;
use crate::provider::IdProvider;
use crate::route;
use crate::types::{ConfigId, RouteTag};
use serde::{Deserialize, Serialize};

/// What happens when a dispatch names a tag outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Log a warning and leave the location untouched.
    #[default]
    Ignore,
    /// Return [`NavError::UnknownTag`]. The location is still untouched.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Navigated(String),
    Unmatched(String),
}

impl Dispatch {
    pub fn url(&self) -> Option<&str> {
        match self {
            Dispatch::Navigated(url) => Some(url),
            Dispatch::Unmatched(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RouteDispatcher
// ---------------------------------------------------------------------------

/// Resolves `(tag, id?)` pairs to config page URLs and navigates there.
pub struct RouteDispatcher<N, P> {
    navigator: N,
    ids: P,
    base_url: Option<String>,
    unmatched: UnmatchedPolicy,
}

impl<N: Navigator, P: IdProvider> RouteDispatcher<N, P> {
    pub fn new(navigator: N, ids: P) -> Self {
        Self {
            navigator,
            ids,
            base_url: None,
            unmatched: UnmatchedPolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Resolve without navigating. `Ok(None)` for an ignored unmatched tag.
    pub fn resolve(&self, tag: &str, config_id: Option<ConfigId>) -> Result<Option<String>> {
        let Some(tag) = self.match_tag(tag)? else {
            return Ok(None);
        };
        self.resolve_tag(tag, config_id).map(Some)
    }

    pub fn resolve_tag(&self, tag: RouteTag, config_id: Option<ConfigId>) -> Result<String> {
        let id = match config_id {
            Some(id) => id,
            None => self.ids.current_id().ok_or(NavError::MissingConfigId)?,
        };
        let path = route::resolve(tag, &id);
        Ok(route::join_base(self.base_url.as_deref(), &path))
    }

    /// Resolve `tag` and navigate to the result.
    ///
    /// An unknown tag never reaches the navigator. Under
    /// [`UnmatchedPolicy::Ignore`] it yields [`Dispatch::Unmatched`].
    pub fn navigate(&self, tag: &str, config_id: Option<ConfigId>) -> Result<Dispatch> {
        match self.match_tag(tag)? {
            Some(t) => self.navigate_tag(t, config_id),
            None => Ok(Dispatch::Unmatched(tag.to_string())),
        }
    }

    pub fn navigate_tag(&self, tag: RouteTag, config_id: Option<ConfigId>) -> Result<Dispatch> {
        let url = self.resolve_tag(tag, config_id)?;
        tracing::info!(tag = tag.as_str(), %url, "navigating");
        self.navigator.navigate_to(&url)?;
        Ok(Dispatch::Navigated(url))
    }

    fn match_tag(&self, tag: &str) -> Result<Option<RouteTag>> {
        match RouteTag::parse(tag) {
            Some(t) => Ok(Some(t)),
            None => match self.unmatched {
                UnmatchedPolicy::Ignore => {
                    tracing::warn!(tag, "unknown route tag, not navigating");
                    Ok(None)
                }
                UnmatchedPolicy::Reject => Err(NavError::UnknownTag(tag.to_string())),
            },
        }
    }
}
