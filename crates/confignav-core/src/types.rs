use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RouteTag
// ---------------------------------------------------------------------------

/// Action keyword selecting a page under `/configs/{id}`.
///
/// The set is closed; anything else is an unmatched tag and never navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTag {
    #[serde(rename = "")]
    Root,
    Rally,
    FullDump,
    Log,
    Destroy,
    Delete,
    Redeploy,
    Clean,
    RunExperiment,
    AdminOpenrc,
    Test,
}

impl RouteTag {
    pub fn all() -> &'static [RouteTag] {
        &[
            RouteTag::Root,
            RouteTag::Rally,
            RouteTag::FullDump,
            RouteTag::Log,
            RouteTag::Destroy,
            RouteTag::Delete,
            RouteTag::Redeploy,
            RouteTag::Clean,
            RouteTag::RunExperiment,
            RouteTag::AdminOpenrc,
            RouteTag::Test,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteTag::Root => "",
            RouteTag::Rally => "rally",
            RouteTag::FullDump => "full_dump",
            RouteTag::Log => "log",
            RouteTag::Destroy => "destroy",
            RouteTag::Delete => "delete",
            RouteTag::Redeploy => "redeploy",
            RouteTag::Clean => "clean",
            RouteTag::RunExperiment => "run_experiment",
            RouteTag::AdminOpenrc => "admin_openrc",
            RouteTag::Test => "test",
        }
    }

    /// Path segment appended after `/configs/{id}`.
    ///
    /// `Root` and `Log` both land on the config page itself.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            RouteTag::Root | RouteTag::Log => None,
            RouteTag::Rally => Some("rally_report"),
            tag => Some(tag.as_str()),
        }
    }

    /// Exact, case-sensitive match on the wire spelling.
    pub fn parse(s: &str) -> Option<RouteTag> {
        RouteTag::all().iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for RouteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RouteTag {
    type Err = crate::error::NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteTag::parse(s).ok_or_else(|| crate::error::NavError::UnknownTag(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ConfigId
// ---------------------------------------------------------------------------

/// Opaque configuration identifier. Interpolated into URLs verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigId(String);

impl ConfigId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConfigId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ConfigId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

macro_rules! config_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ConfigId {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

config_id_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact() {
        assert_eq!(RouteTag::parse("rally"), Some(RouteTag::Rally));
        assert_eq!(RouteTag::parse(""), Some(RouteTag::Root));
        assert_eq!(RouteTag::parse("Rally"), None);
        assert_eq!(RouteTag::parse(" rally"), None);
        assert_eq!(RouteTag::parse("rally_report"), None);
    }

    #[test]
    fn from_str_reports_unknown_tag() {
        let err = "bogus".parse::<RouteTag>().unwrap_err();
        assert!(matches!(err, crate::NavError::UnknownTag(ref t) if t == "bogus"));
    }

    #[test]
    fn every_tag_round_trips_through_its_spelling() {
        for tag in RouteTag::all() {
            assert_eq!(RouteTag::parse(tag.as_str()), Some(*tag));
        }
    }

    #[test]
    fn suffix_matches_tag_except_rally_and_base() {
        assert_eq!(RouteTag::Root.suffix(), None);
        assert_eq!(RouteTag::Log.suffix(), None);
        assert_eq!(RouteTag::Rally.suffix(), Some("rally_report"));
        assert_eq!(RouteTag::FullDump.suffix(), Some("full_dump"));
        assert_eq!(RouteTag::AdminOpenrc.suffix(), Some("admin_openrc"));
    }

    #[test]
    fn serde_uses_wire_spelling() {
        let json = serde_json::to_string(&RouteTag::RunExperiment).unwrap();
        assert_eq!(json, "\"run_experiment\"");
        let root: RouteTag = serde_json::from_str("\"\"").unwrap();
        assert_eq!(root, RouteTag::Root);
    }

    #[test]
    fn config_id_is_verbatim() {
        assert_eq!(ConfigId::from(42).to_string(), "42");
        assert_eq!(ConfigId::from(-1i64).to_string(), "-1");
        assert_eq!(ConfigId::from("a b/c").as_str(), "a b/c");
        let json = serde_json::to_string(&ConfigId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
