//! Platform identifiers and the registry that resolves them.
//!
//! Platforms are an open set: the host environment decides which names are
//! valid through a [`PlatformRegistry`]. [`KnownPlatforms`] is the registry
//! used when no other is supplied.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Serialize, Serializer};

/// Built-in platform names, in their canonical spelling.
pub const BUILTIN_PLATFORMS: &[&str] = &[
    "Win32",
    "Win64",
    "HoloLens",
    "Mac",
    "XboxOne",
    "PS4",
    "IOS",
    "Android",
    "HTML5",
    "Linux",
    "LinuxAArch64",
    "AllDesktop",
    "TVOS",
    "Switch",
    "Lumin",
];

/// An opaque platform identifier.
///
/// Compares by its canonical name. Obtain one through a registry so the
/// spelling is normalized; [`Platform::new`] takes the name as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Platform(Arc<str>);

impl Platform {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Resolves platform names supplied by configuration.
pub trait PlatformRegistry {
    /// Resolve `name` to a platform, or `None` if the host does not know it.
    fn try_parse(&self, name: &str) -> Option<Platform>;
}

impl<R: PlatformRegistry + ?Sized> PlatformRegistry for &R {
    fn try_parse(&self, name: &str) -> Option<Platform> {
        (**self).try_parse(name)
    }
}

/// Registry over a fixed list of names, matched case-insensitively.
#[derive(Debug, Clone)]
pub struct KnownPlatforms {
    names: IndexSet<Platform>,
}

impl Default for KnownPlatforms {
    fn default() -> Self {
        Self {
            names: BUILTIN_PLATFORMS.iter().map(|name| Platform::new(*name)).collect(),
        }
    }
}

impl KnownPlatforms {
    /// A registry that knows no platforms at all.
    pub fn empty() -> Self {
        Self {
            names: IndexSet::new(),
        }
    }

    /// Register an additional platform. Names already known (ignoring case)
    /// are left untouched.
    pub fn with_platform(mut self, name: &str) -> Self {
        if self.try_parse(name).is_none() {
            self.names.insert(Platform::new(name));
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl PlatformRegistry for KnownPlatforms {
    fn try_parse(&self, name: &str) -> Option<Platform> {
        self.names
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(name))
            .cloned()
    }
}
