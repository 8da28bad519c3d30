//! Random test data.
//!
//! Logins combine a per-generator run prefix with an atomic sequence, so two
//! draws from the same generator never collide, even across threads. The
//! prefix is a UUID v7, so independent generators do not collide either.

use std::sync::atomic::{AtomicU64, Ordering};

use apicheck_domain::{FullUser, Game};
use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use uuid::Uuid;

/// Login and password of the built-in administrator.
pub const ADMIN_LOGIN: &str = "admin";

/// Password of the built-in administrator.
pub const ADMIN_PASS: &str = "admin";

const LOGIN_PREFIX: &str = "threadQATestUser";
const PASSWORD_LEN: usize = 12;

const TITLES: &[&str] = &[
    "Chess Masters",
    "Go Legends",
    "Starfall",
    "Rogue Harbor",
    "Pixel Farm",
    "Night Racer",
];
const GENRES: &[&str] = &["Board", "Strategy", "RPG", "Simulation", "Racing"];
const COMPANIES: &[&str] = &["ThreadQA Games", "Nord Studio", "Blue Owl"];
const TAGS: &[&str] = &["multiplayer", "singleplayer", "casual", "hardcore", "indie"];

/// Thread-safe generator of unique test identities.
#[derive(Debug)]
pub struct TestDataGenerator {
    run_id: String,
    sequence: AtomicU64,
}

impl Default for TestDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDataGenerator {
    /// Creates a generator with a fresh run prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_run_id(Uuid::now_v7().simple().to_string())
    }

    /// Creates a generator with a fixed run prefix.
    #[must_use]
    pub fn with_run_id(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Returns the run prefix.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Returns a login unique within this generator.
    pub fn unique_login(&self) -> String {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{LOGIN_PREFIX}{}x{n}", self.run_id)
    }

    /// Returns a random alphanumeric password.
    #[must_use]
    pub fn random_password(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(PASSWORD_LEN)
            .map(char::from)
            .collect()
    }

    /// Returns a fresh user with no games.
    pub fn random_user(&self) -> FullUser {
        FullUser::new(self.unique_login(), self.random_password())
    }

    /// Returns a fresh user owning one to three games.
    pub fn random_user_with_games(&self) -> FullUser {
        let count = rand::rng().random_range(1..=3);
        (0..count).fold(self.random_user(), |user, _| {
            user.with_game(self.random_game())
        })
    }

    /// Returns a random game.
    #[must_use]
    pub fn random_game(&self) -> Game {
        let mut rng = rand::rng();
        let pick = |items: &[&str], rng: &mut rand::rngs::ThreadRng| {
            items.choose(rng).copied().unwrap_or_default().to_string()
        };

        let title = pick(TITLES, &mut rng);
        let genre = pick(GENRES, &mut rng);
        let company = pick(COMPANIES, &mut rng);
        let tags = TAGS
            .choose_multiple(&mut rng, 2)
            .map(ToString::to_string)
            .collect();
        let is_free = rng.random_bool(0.3);

        Game {
            game_id: None,
            title,
            genre,
            company,
            price: if is_free { 0 } else { rng.random_range(1..=60) },
            rating: rng.random_range(0..=10),
            required_age: rng.random_bool(0.5),
            is_free,
            tags,
        }
    }

    /// Returns the built-in administrator. Always equal across calls.
    #[must_use]
    pub fn admin_user() -> FullUser {
        FullUser::new(ADMIN_LOGIN, ADMIN_PASS)
    }
}
