//! Fixture injection.
//!
//! A test declares what it needs in a [`FixtureManifest`]; the
//! [`FixtureRegistry`] checks every marker and supplies the values before
//! the test body runs.

mod marker;
mod registry;

pub use marker::{FixtureManifest, FixtureMarker, FixtureType};
pub use registry::{FixtureLifetime, FixtureRegistry, ResolvedFixtures};

use std::sync::Arc;

use apicheck_domain::FullUser;

use crate::test_data::TestDataGenerator;

/// The built-in administrator (`FullUser`, constant).
pub const ADMIN_USER: &str = "admin";

/// A freshly generated user (`FullUser`, generated).
pub const RANDOM_USER: &str = "random_user";

/// A freshly generated user owning games (`FullUser`, generated).
pub const RANDOM_USER_WITH_GAMES: &str = "random_user_with_games";

/// Marker for the administrator fixture.
#[must_use]
pub fn admin_user() -> FixtureMarker {
    FixtureMarker::new::<FullUser>(ADMIN_USER)
}

/// Builds the registry with the suite's standard fixtures.
///
/// Generated fixtures draw from `generator`, which is shared by every
/// resolution.
#[must_use]
pub fn default_registry(generator: Arc<TestDataGenerator>) -> FixtureRegistry {
    let with_games = Arc::clone(&generator);
    let mut registry = FixtureRegistry::new();
    registry
        .register_constant(ADMIN_USER, TestDataGenerator::admin_user())
        .register_generated(RANDOM_USER, move || generator.random_user())
        .register_generated(RANDOM_USER_WITH_GAMES, move || {
            with_games.random_user_with_games()
        });
    registry
}
