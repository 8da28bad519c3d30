//! Fixture resolution with the standard registry.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use apicheck_application::fixture::{
    ADMIN_USER, FixtureLifetime, RANDOM_USER, RANDOM_USER_WITH_GAMES, admin_user,
};
use apicheck_application::{FixtureManifest, TestDataGenerator, default_registry};
use apicheck_domain::{CheckError, FullUser};

fn registry() -> apicheck_application::FixtureRegistry {
    default_registry(Arc::new(TestDataGenerator::new()))
}

#[test]
fn test_standard_fixture_lifetimes() {
    let registry = registry();
    assert_eq!(registry.lifetime(ADMIN_USER), Some(FixtureLifetime::Constant));
    assert_eq!(registry.lifetime(RANDOM_USER), Some(FixtureLifetime::Generated));
    assert_eq!(
        registry.lifetime(RANDOM_USER_WITH_GAMES),
        Some(FixtureLifetime::Generated)
    );
}

#[test]
fn test_admin_is_constant_across_resolutions() {
    let registry = registry();
    let manifest = FixtureManifest::new().with_marker(admin_user());

    for _ in 0..100 {
        let fixtures = registry.resolve(&manifest).unwrap();
        let admin = fixtures.get::<FullUser>(ADMIN_USER).unwrap();
        assert_eq!(admin.login, "admin");
        assert_eq!(admin.pass.as_deref(), Some("admin"));
    }
}

#[test]
fn test_generated_users_never_collide() {
    let registry = registry();
    let manifest = FixtureManifest::new().require::<FullUser>(RANDOM_USER);

    let logins: HashSet<String> = (0..2_000)
        .map(|_| {
            let mut fixtures = registry.resolve(&manifest).unwrap();
            fixtures.take::<FullUser>(RANDOM_USER).unwrap().login
        })
        .collect();

    assert_eq!(logins.len(), 2_000);
}

#[test]
fn test_generated_users_unique_across_parallel_tests() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let manifest = FixtureManifest::new()
                    .require::<FullUser>(RANDOM_USER)
                    .require::<FullUser>(RANDOM_USER_WITH_GAMES);
                (0..250)
                    .flat_map(|_| {
                        let fixtures = registry.resolve(&manifest).unwrap();
                        [
                            fixtures.at::<FullUser>(0).unwrap().login.clone(),
                            fixtures.at::<FullUser>(1).unwrap().login.clone(),
                        ]
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for login in handle.join().unwrap() {
            assert!(seen.insert(login), "duplicate login generated");
        }
    }
    assert_eq!(seen.len(), 2_000);
}

#[test]
fn test_unknown_fixture_fails_setup() {
    let registry = registry();
    let manifest = FixtureManifest::new()
        .with_marker(admin_user())
        .require::<FullUser>("superuser");

    let mut body_ran = false;
    let result = registry.run(&manifest, |_| body_ran = true);

    match result {
        Err(CheckError::UnsupportedFixture { name, position, .. }) => {
            assert_eq!(name, "superuser");
            assert_eq!(position, 1);
        }
        other => panic!("expected unsupported fixture, got {other:?}"),
    }
    assert!(!body_ran);
}

#[test]
fn test_mismatched_type_fails_setup() {
    let registry = registry();
    let manifest = FixtureManifest::new().require::<String>(ADMIN_USER);

    let mut body_ran = false;
    let result = registry.run(&manifest, |_| body_ran = true);

    assert!(matches!(
        result,
        Err(CheckError::UnsupportedFixture { ref reason, .. }) if reason.contains("declared type")
    ));
    assert!(!body_ran);
}

#[test]
fn test_body_receives_values() {
    let registry = registry();
    let manifest = FixtureManifest::new().with_marker(admin_user());

    let login = registry
        .run(&manifest, |fixtures| {
            fixtures.get::<FullUser>(ADMIN_USER).map(|u| u.login.clone())
        })
        .unwrap()
        .unwrap();

    assert_eq!(login, "admin");
}
