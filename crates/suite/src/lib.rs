//! apicheck Suite - Live checks against the user and file API
//!
//! The tests in this crate talk to a running server and are ignored by
//! default. Point `APICHECK_BASE_URL` at the server and run them with
//! `cargo test -p apicheck-suite -- --ignored`.

use std::sync::{Arc, LazyLock};

use apicheck_application::{
    ApiConfig, ApplicationResult, FileService, FixtureRegistry, TestDataGenerator, UserService,
    default_registry,
};
use apicheck_infrastructure::{ReqwestHttpClient, init_test_logging, load_from_env};

/// Client shared by every service of a run.
pub type SharedClient = Arc<ReqwestHttpClient>;

/// One generator per test process, shared by every context.
static GENERATOR: LazyLock<Arc<TestDataGenerator>> =
    LazyLock::new(|| Arc::new(TestDataGenerator::new()));

/// Returns the generator shared by every context in this process.
#[must_use]
pub fn shared_generator() -> Arc<TestDataGenerator> {
    Arc::clone(&GENERATOR)
}

/// Services, fixtures and data generator for one test.
#[derive(Debug)]
pub struct SuiteContext {
    /// Configuration the client was built with.
    pub config: ApiConfig,
    /// User endpoints.
    pub users: UserService<SharedClient>,
    /// File endpoints.
    pub files: FileService<SharedClient>,
    /// Source of unique logins and passwords.
    pub generator: Arc<TestDataGenerator>,
    /// Standard fixtures backed by `generator`.
    pub fixtures: FixtureRegistry,
}

impl SuiteContext {
    /// Builds a context from `APICHECK_*` configuration and installs test
    /// logging.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn from_env() -> ApplicationResult<Self> {
        init_test_logging();
        Self::from_config(load_from_env()?, shared_generator())
    }

    /// Builds a context for the given configuration and data generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(
        config: ApiConfig,
        generator: Arc<TestDataGenerator>,
    ) -> ApplicationResult<Self> {
        let client = Arc::new(ReqwestHttpClient::new(&config)?);
        tracing::info!(
            base_url = %config.base_url,
            run_id = generator.run_id(),
            "suite context ready"
        );

        Ok(Self {
            users: UserService::new(Arc::clone(&client)),
            files: FileService::new(client),
            fixtures: default_registry(Arc::clone(&generator)),
            generator,
            config,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apicheck_application::fixture::{ADMIN_USER, RANDOM_USER};
    use apicheck_application::FixtureLifetime;

    #[test]
    fn test_context_from_config() {
        let config = ApiConfig::new("http://localhost:8080/").unwrap();
        let context = SuiteContext::from_config(config.clone(), shared_generator()).unwrap();

        assert_eq!(context.config, config);
        assert_eq!(
            context.fixtures.lifetime(ADMIN_USER),
            Some(FixtureLifetime::Constant)
        );
        assert_eq!(
            context.fixtures.lifetime(RANDOM_USER),
            Some(FixtureLifetime::Generated)
        );
    }

    #[test]
    fn test_contexts_share_one_generator() {
        let config = ApiConfig::new("http://localhost:8080/").unwrap();
        let first = SuiteContext::from_config(config.clone(), shared_generator()).unwrap();
        let second = SuiteContext::from_config(config, shared_generator()).unwrap();

        assert!(Arc::ptr_eq(&first.generator, &second.generator));
        assert_ne!(
            first.generator.random_user().login,
            second.generator.random_user().login
        );
    }
}
