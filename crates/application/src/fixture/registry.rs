//! Fixture registry and resolver.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use apicheck_domain::{CheckError, CheckResult};

use super::marker::{FixtureManifest, FixtureMarker, FixtureType};

type Supplier = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// How a fixture value is produced on each resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureLifetime {
    /// The same logical value every time.
    Constant,
    /// A fresh value per resolution.
    Generated,
}

#[derive(Clone)]
struct FixtureEntry {
    fixture_type: FixtureType,
    lifetime: FixtureLifetime,
    supplier: Supplier,
}

/// Named, typed fixture suppliers.
///
/// The registry is immutable once built and is `Send + Sync`, so it can be
/// shared between tests running on parallel threads.
#[derive(Clone, Default)]
pub struct FixtureRegistry {
    entries: HashMap<String, FixtureEntry>,
}

impl fmt::Debug for FixtureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, entry) in &self.entries {
            map.entry(name, &(entry.fixture_type, entry.lifetime));
        }
        map.finish()
    }
}

impl FixtureRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constant fixture; every resolution yields a clone of
    /// `value`. Replaces any fixture with the same name.
    pub fn register_constant<T>(&mut self, name: impl Into<String>, value: T) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
    {
        let value = Arc::new(value);
        self.insert(
            name.into(),
            FixtureEntry {
                fixture_type: FixtureType::of::<T>(),
                lifetime: FixtureLifetime::Constant,
                supplier: Arc::new(move || -> Box<dyn Any + Send> {
                    Box::new(T::clone(&value))
                }),
            },
        )
    }

    /// Registers a generated fixture; `supplier` is called once per
    /// resolution. Replaces any fixture with the same name.
    pub fn register_generated<T, F>(&mut self, name: impl Into<String>, supplier: F) -> &mut Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            FixtureEntry {
                fixture_type: FixtureType::of::<T>(),
                lifetime: FixtureLifetime::Generated,
                supplier: Arc::new(move || -> Box<dyn Any + Send> { Box::new(supplier()) }),
            },
        )
    }

    fn insert(&mut self, name: String, entry: FixtureEntry) -> &mut Self {
        tracing::debug!(fixture = %name, lifetime = ?entry.lifetime, "registered fixture");
        self.entries.insert(name, entry);
        self
    }

    /// Returns how fixture `name` is produced, if registered.
    #[must_use]
    pub fn lifetime(&self, name: &str) -> Option<FixtureLifetime> {
        self.entries.get(name).map(|entry| entry.lifetime)
    }

    /// Returns the registered fixture names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Answers whether the marker at `position` can be supplied.
    ///
    /// Returns `Ok(false)` for an unknown name, leaving the decision to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::UnsupportedFixture` when the name is registered
    /// with a different type than the marker declares.
    pub fn supports(&self, position: usize, marker: &FixtureMarker) -> CheckResult<bool> {
        let Some(entry) = self.entries.get(marker.name()) else {
            return Ok(false);
        };
        if entry.fixture_type != marker.fixture_type() {
            return Err(CheckError::unsupported_fixture(
                marker.name(),
                position,
                format!(
                    "declared type {} but fixture provides {}",
                    marker.fixture_type().name(),
                    entry.fixture_type.name()
                ),
            ));
        }
        Ok(true)
    }

    /// Checks that every marker in the manifest can be supplied.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::UnsupportedFixture` for the first marker with an
    /// unknown name or a mismatched type.
    pub fn check(&self, manifest: &FixtureManifest) -> CheckResult<()> {
        for (position, marker) in manifest.markers().iter().enumerate() {
            if !self.supports(position, marker)? {
                return Err(CheckError::unsupported_fixture(
                    marker.name(),
                    position,
                    "no fixture registered under this name",
                ));
            }
        }
        Ok(())
    }

    /// Resolves every marker in the manifest.
    ///
    /// All markers are checked before any supplier runs, so a bad manifest
    /// never produces partial values.
    ///
    /// # Errors
    ///
    /// Same as [`Self::check`].
    pub fn resolve(&self, manifest: &FixtureManifest) -> CheckResult<ResolvedFixtures> {
        self.check(manifest)?;

        let mut values = Vec::with_capacity(manifest.len());
        for (position, marker) in manifest.markers().iter().enumerate() {
            let Some(entry) = self.entries.get(marker.name()) else {
                return Err(CheckError::unsupported_fixture(
                    marker.name(),
                    position,
                    "no fixture registered under this name",
                ));
            };
            tracing::debug!(fixture = marker.name(), position, "resolving fixture");
            values.push(ResolvedValue {
                marker: marker.clone(),
                value: Some((entry.supplier)()),
            });
        }
        Ok(ResolvedFixtures { values })
    }

    /// Resolves the manifest, then runs `body` with the values.
    ///
    /// `body` is not called when resolution fails.
    ///
    /// # Errors
    ///
    /// Same as [`Self::check`].
    pub fn run<R>(
        &self,
        manifest: &FixtureManifest,
        body: impl FnOnce(ResolvedFixtures) -> R,
    ) -> CheckResult<R> {
        let fixtures = self.resolve(manifest)?;
        Ok(body(fixtures))
    }
}

struct ResolvedValue {
    marker: FixtureMarker,
    value: Option<Box<dyn Any + Send>>,
}

/// Fixture values resolved for one test, in manifest order.
pub struct ResolvedFixtures {
    values: Vec<ResolvedValue>,
}

impl fmt::Debug for ResolvedFixtures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.values.iter().map(|v| v.marker.name()))
            .finish()
    }
}

impl ResolvedFixtures {
    /// Returns the number of resolved values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrows the first value named `name`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::UndeclaredFixture` if the manifest did not
    /// declare `name`, and `CheckError::UnsupportedFixture` if the value
    /// was taken or `T` is not its type.
    pub fn get<T: Any>(&self, name: &str) -> CheckResult<&T> {
        let position = self.position_of(name)?;
        self.at(position)
    }

    /// Borrows the value at manifest `position`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub fn at<T: Any>(&self, position: usize) -> CheckResult<&T> {
        let resolved = self.values.get(position).ok_or_else(|| {
            CheckError::unsupported_fixture("", position, "position out of range")
        })?;
        resolved
            .value
            .as_ref()
            .ok_or_else(|| taken(&resolved.marker, position))?
            .downcast_ref::<T>()
            .ok_or_else(|| wrong_type::<T>(&resolved.marker, position))
    }

    /// Moves the first value named `name` out.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub fn take<T: Any>(&mut self, name: &str) -> CheckResult<T> {
        let position = self.position_of(name)?;
        let resolved = &mut self.values[position];
        let value = resolved
            .value
            .take()
            .ok_or_else(|| taken(&resolved.marker, position))?;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => {
                let error = wrong_type::<T>(&resolved.marker, position);
                resolved.value = Some(value);
                Err(error)
            }
        }
    }

    fn position_of(&self, name: &str) -> CheckResult<usize> {
        self.values
            .iter()
            .position(|v| v.marker.name() == name)
            .ok_or_else(|| CheckError::UndeclaredFixture {
                name: name.to_string(),
            })
    }
}

fn taken(marker: &FixtureMarker, position: usize) -> CheckError {
    CheckError::unsupported_fixture(marker.name(), position, "value was already taken")
}

fn wrong_type<T: Any>(marker: &FixtureMarker, position: usize) -> CheckError {
    CheckError::unsupported_fixture(
        marker.name(),
        position,
        format!(
            "requested {} but fixture is {}",
            FixtureType::of::<T>().name(),
            marker.fixture_type().name()
        ),
    )
}
