use crate::types::ConfigId;

pub const DEFAULT_ID_ENV: &str = "CONFIG_ID";

/// Source of the config id used when a caller does not pass one.
///
/// Read at dispatch time, never written.
pub trait IdProvider {
    fn current_id(&self) -> Option<ConfigId>;
}

impl<F> IdProvider for F
where
    F: Fn() -> Option<ConfigId>,
{
    fn current_id(&self) -> Option<ConfigId> {
        self()
    }
}

/// Always yields the same id.
#[derive(Debug, Clone)]
pub struct FixedId(pub ConfigId);

impl IdProvider for FixedId {
    fn current_id(&self) -> Option<ConfigId> {
        Some(self.0.clone())
    }
}

/// Never yields an id.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoId;

impl IdProvider for NoId {
    fn current_id(&self) -> Option<ConfigId> {
        None
    }
}

/// Reads an environment variable on every call. Empty values count as unset;
/// bytes that are not UTF-8 are replaced rather than dropped.
#[derive(Debug, Clone)]
pub struct EnvIdProvider {
    var: String,
}

impl EnvIdProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvIdProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ID_ENV)
    }
}

impl IdProvider for EnvIdProvider {
    fn current_id(&self) -> Option<ConfigId> {
        std::env::var_os(&self.var)
            .filter(|v| !v.is_empty())
            .map(|v| ConfigId::from(v.to_string_lossy().into_owned()))
    }
}
