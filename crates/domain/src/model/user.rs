//! User models sent to and returned by the user endpoints.

use serde::{Deserialize, Serialize};

/// A user account with its game library.
///
/// `pass` is optional so that signup requests without a password can be
/// expressed; it is omitted from the JSON when unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FullUser {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login name.
    pub login: String,
    /// Password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
    /// Games owned by the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<Game>,
}

impl FullUser {
    /// Creates a user with a login and password and no games.
    #[must_use]
    pub fn new(login: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            id: None,
            login: login.into(),
            pass: Some(pass.into()),
            games: Vec::new(),
        }
    }

    /// Replaces the password (builder pattern).
    #[must_use]
    pub fn with_pass(mut self, pass: Option<String>) -> Self {
        self.pass = pass;
        self
    }

    /// Adds a game (builder pattern).
    #[must_use]
    pub fn with_game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }
}

/// A game in a user's library.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i64>,
    /// Title.
    pub title: String,
    /// Genre.
    pub genre: String,
    /// Developer or publisher.
    #[serde(default)]
    pub company: String,
    /// Price in whole currency units.
    #[serde(default)]
    pub price: u32,
    /// Rating from 0 to 10.
    #[serde(default)]
    pub rating: u8,
    /// Whether the game is age restricted.
    #[serde(default)]
    pub required_age: bool,
    /// Whether the game is free to play.
    #[serde(default)]
    pub is_free: bool,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_without_password_omits_field() {
        let user = FullUser::new("demo", "secret").with_pass(None);
        let value = serde_json::to_value(&user).unwrap_or_default();
        assert_eq!(value, json!({"login": "demo"}));
    }

    #[test]
    fn test_game_uses_camel_case() {
        let game = Game {
            title: "Chess".to_string(),
            genre: "Board".to_string(),
            is_free: true,
            ..Game::default()
        };
        let value = serde_json::to_value(&game).unwrap_or_default();
        assert_eq!(value["isFree"], json!(true));
        assert_eq!(value["requiredAge"], json!(false));
        assert!(value.get("gameId").is_none());
    }

    #[test]
    fn test_user_from_server_json() {
        let user: Option<FullUser> = serde_json::from_value(json!({
            "id": 12,
            "login": "admin",
            "pass": "admin",
            "games": [{"gameId": 1, "title": "Go", "genre": "Board"}]
        }))
        .ok();
        let user = user.unwrap_or_default();
        assert_eq!(user.id, Some(12));
        assert_eq!(user.games.len(), 1);
        assert_eq!(user.games[0].game_id, Some(1));
    }
}
