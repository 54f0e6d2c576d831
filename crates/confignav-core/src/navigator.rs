use crate::error::{NavError, Result};
use std::sync::Mutex;

/// Performs the navigation side effect for a resolved URL.
pub trait Navigator {
    fn navigate_to(&self, url: &str) -> Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate_to(&self, url: &str) -> Result<()> {
        (**self).navigate_to(url)
    }
}

// ---------------------------------------------------------------------------
// MemoryNavigator
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Location {
    current: Option<String>,
    history: Vec<String>,
}

/// In-process stand-in for a page location. Every navigation replaces the
/// current location and is appended to the history.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    inner: Mutex<Location>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing location. The starting point is not part of the history.
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Location {
                current: Some(location.into()),
                history: Vec::new(),
            }),
        }
    }

    pub fn location(&self) -> Option<String> {
        self.inner.lock().ok().and_then(|l| l.current.clone())
    }

    pub fn history(&self) -> Vec<String> {
        self.inner
            .lock()
            .ok()
            .map(|l| l.history.clone())
            .unwrap_or_default()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate_to(&self, url: &str) -> Result<()> {
        let mut loc = self
            .inner
            .lock()
            .map_err(|_| NavError::NavigationFailed("location lock poisoned".to_string()))?;
        loc.current = Some(url.to_string());
        loc.history.push(url.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// BrowserNavigator
// ---------------------------------------------------------------------------

/// Opens URLs in the desktop's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, url: &str) -> Result<()> {
        tracing::debug!(url, "opening browser");
        open::that(url).map_err(|e| NavError::NavigationFailed(format!("{url}: {e}")))
    }
}
