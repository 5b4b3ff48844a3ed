//! Version-control system kinds understood by the `go` tool.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Version-control system used to fetch a repository.
///
/// The textual form is what ends up in the `go-import` meta tag, so only the
/// four kinds the `go` tool supports are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vcs {
    /// Git (`git`)
    #[default]
    Git,
    /// Mercurial (`hg`)
    Mercurial,
    /// Subversion (`svn`)
    Subversion,
    /// Bazaar (`bzr`)
    Bazaar,
}

impl Vcs {
    /// All supported kinds, in display order.
    pub const ALL: [Vcs; 4] = [Vcs::Git, Vcs::Mercurial, Vcs::Subversion, Vcs::Bazaar];

    /// Identifier used in `go-import` meta tags.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Mercurial => "hg",
            Self::Subversion => "svn",
            Self::Bazaar => "bzr",
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vcs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "hg" | "mercurial" => Ok(Self::Mercurial),
            "svn" | "subversion" => Ok(Self::Subversion),
            "bzr" | "bazaar" => Ok(Self::Bazaar),
            other => Err(format!("unsupported vcs: {:?}", other)),
        }
    }
}

impl Serialize for Vcs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Vcs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
