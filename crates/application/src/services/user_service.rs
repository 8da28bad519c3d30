//! User endpoints.

use apicheck_domain::{ApiRequest, AssertableResponse, FullUser, JwtAuthData, PasswordChange};

use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// `POST` registers a user.
pub const SIGNUP: &str = "/api/signup";
/// `POST` exchanges credentials for a token.
pub const LOGIN: &str = "/api/login";
/// `GET`/`PUT`/`DELETE` the authenticated user.
pub const USER: &str = "/api/user";
/// `GET` all logins.
pub const USERS: &str = "/api/users";

/// Thin wrapper over the user endpoints.
///
/// Every call returns the captured response unchecked; tests apply
/// conditions themselves.
#[derive(Debug, Clone)]
pub struct UserService<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> UserService<C> {
    /// Creates a new `UserService`.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Registers `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded or the call fails.
    pub async fn register(&self, user: &FullUser) -> ApplicationResult<AssertableResponse> {
        self.send(ApiRequest::post(SIGNUP).json(user)?).await
    }

    /// Logs in as `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded or the call fails.
    pub async fn auth(&self, user: &FullUser) -> ApplicationResult<AssertableResponse> {
        self.send(ApiRequest::post(LOGIN).json(&JwtAuthData::from(user))?)
            .await
    }

    /// Fetches the user owning `token`. An empty token sends no header.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_user_info(&self, token: &str) -> ApplicationResult<AssertableResponse> {
        self.send(ApiRequest::get(USER).bearer(token)).await
    }

    /// Changes the password of the user owning `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded or the call fails.
    pub async fn update_pass(
        &self,
        new_pass: &str,
        token: &str,
    ) -> ApplicationResult<AssertableResponse> {
        let body = PasswordChange {
            password: new_pass.to_string(),
        };
        self.send(ApiRequest::put(USER).json(&body)?.bearer(token))
            .await
    }

    /// Deletes the user owning `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn delete_user(&self, token: &str) -> ApplicationResult<AssertableResponse> {
        self.send(ApiRequest::delete(USER).bearer(token)).await
    }

    /// Lists all logins.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get_all_users(&self) -> ApplicationResult<AssertableResponse> {
        self.send(ApiRequest::get(USERS)).await
    }

    async fn send(&self, request: ApiRequest) -> ApplicationResult<AssertableResponse> {
        let capture = self.client.execute(&request).await?;
        Ok(AssertableResponse::new(capture))
    }
}
