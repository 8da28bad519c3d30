//! Fixture markers and manifests.

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// The declared type of a fixture value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixtureType {
    id: TypeId,
    name: &'static str,
}

impl FixtureType {
    /// Returns the fixture type of `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the Rust type name, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for FixtureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declares that a test depends on the fixture `name` of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureMarker {
    name: String,
    fixture_type: FixtureType,
}

impl FixtureMarker {
    /// Creates a marker for fixture `name` with declared type `T`.
    #[must_use]
    pub fn new<T: Any>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture_type: FixtureType::of::<T>(),
        }
    }

    /// Returns the fixture name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn fixture_type(&self) -> FixtureType {
        self.fixture_type
    }
}

/// Ordered list of fixtures a test depends on.
///
/// The position of each marker is its "parameter position" and is reported
/// in setup errors.
///
/// ```
/// use apicheck_application::fixture::{ADMIN_USER, FixtureManifest};
/// use apicheck_domain::FullUser;
///
/// let manifest = FixtureManifest::new().require::<FullUser>(ADMIN_USER);
/// assert_eq!(manifest.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureManifest {
    markers: Vec<FixtureMarker>,
}

impl FixtureManifest {
    /// Creates an empty manifest.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Adds a dependency on fixture `name` of type `T` (builder pattern).
    #[must_use]
    pub fn require<T: Any>(mut self, name: impl Into<String>) -> Self {
        self.markers.push(FixtureMarker::new::<T>(name));
        self
    }

    /// Adds a prepared marker (builder pattern).
    #[must_use]
    pub fn with_marker(mut self, marker: FixtureMarker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Returns the markers in declaration order.
    #[must_use]
    pub fn markers(&self) -> &[FixtureMarker] {
        &self.markers
    }

    /// Check if the manifest is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Get the number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }
}
