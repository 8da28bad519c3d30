//! In-memory fake of the user and file API.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use apicheck_application::{ExecuteFuture, HttpClient, HttpClientError};
use apicheck_domain::{ApiRequest, FullUser, HttpMethod, RequestBody, ResponseCapture};
use serde_json::{Value, json};

/// Logins the fake server treats as protected base users.
pub const BASE_USERS: &[&str] = &["admin", "demo", "user"];

pub const BASE_IMAGE: &[u8] = b"\xff\xd8\xff\xe0fake-jpeg";

#[derive(Debug, Default)]
struct State {
    users: HashMap<String, FullUser>,
    next_id: i64,
    last_file: Option<Vec<u8>>,
    requests: Vec<ApiRequest>,
}

#[derive(Debug)]
pub struct FakeUserApi {
    state: Mutex<State>,
}

impl Default for FakeUserApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeUserApi {
    pub fn new() -> Self {
        let mut state = State::default();
        for login in BASE_USERS {
            state.next_id += 1;
            let mut user = FullUser::new(*login, *login);
            user.id = Some(state.next_id);
            state.users.insert((*login).to_string(), user);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn has_user(&self, login: &str) -> bool {
        self.lock().users.contains_key(login)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn handle(&self, request: &ApiRequest) -> ResponseCapture {
        let mut state = self.lock();
        state.requests.push(request.clone());

        let caller = request
            .bearer
            .as_deref()
            .and_then(|token| token.strip_prefix("fake."))
            .and_then(|rest| rest.strip_suffix(".sig"))
            .filter(|login| state.users.contains_key(*login))
            .map(ToString::to_string);

        match (request.method, request.path.as_str()) {
            (HttpMethod::Post, "/api/signup") => {
                let user = json_body::<FullUser>(request)
                    .filter(|u| !u.login.is_empty() && u.pass.is_some());
                match user {
                    None => info(400, "fail", "Missing login or password"),
                    Some(user) if state.users.contains_key(&user.login) => {
                        info(400, "fail", "Login already exist")
                    }
                    Some(mut user) => {
                        state.next_id += 1;
                        user.id = Some(state.next_id);
                        state.users.insert(user.login.clone(), user);
                        info(201, "success", "User created")
                    }
                }
            }
            (HttpMethod::Post, "/api/login") => {
                let credentials = json_body::<Value>(request).unwrap_or_default();
                let username = credentials["username"].as_str().unwrap_or_default();
                let password = credentials["password"].as_str().unwrap_or_default();
                let valid = state
                    .users
                    .get(username)
                    .is_some_and(|u| u.pass.as_deref() == Some(password));
                if valid {
                    respond(200, &json!({"token": format!("fake.{username}.sig")}))
                } else {
                    respond(401, &json!({"error": "Unauthorized"}))
                }
            }
            (_, "/api/user") => {
                let Some(login) = caller else {
                    return respond(401, &json!({"error": "Unauthorized"}));
                };
                let protected = BASE_USERS.contains(&login.as_str());
                match request.method {
                    HttpMethod::Get => respond(200, &serde_json::to_value(&state.users[&login]).unwrap()),
                    HttpMethod::Put if protected => info(400, "fail", "Cant update base users"),
                    HttpMethod::Put => {
                        let password = json_body::<Value>(request)
                            .and_then(|v| v["password"].as_str().map(ToString::to_string));
                        if let Some(user) = state.users.get_mut(&login) {
                            user.pass = password;
                        }
                        info(200, "success", "User password successfully changed")
                    }
                    HttpMethod::Delete if protected => info(400, "fail", "Cant delete base users"),
                    HttpMethod::Delete => {
                        state.users.remove(&login);
                        info(200, "success", "User successfully deleted")
                    }
                    HttpMethod::Post => respond(405, &json!({})),
                }
            }
            (HttpMethod::Get, "/api/users") => {
                let mut logins: Vec<_> = state.users.keys().cloned().collect();
                logins.sort();
                respond(200, &json!(logins))
            }
            (HttpMethod::Get, "/api/files/download") => raw(200, BASE_IMAGE.to_vec()),
            (HttpMethod::Post, "/api/files/upload") => match &request.body {
                RequestBody::Multipart { field, bytes, .. } if field == "file" => {
                    state.last_file = Some(bytes.clone());
                    info(200, "success", "file uploaded to server")
                }
                _ => info(400, "fail", "No file"),
            },
            (HttpMethod::Get, "/api/files/downloadLastFile") => {
                raw(200, state.last_file.clone().unwrap_or_default())
            }
            _ => respond(404, &json!({"error": "Not Found"})),
        }
    }
}

impl HttpClient for FakeUserApi {
    fn execute(&self, request: &ApiRequest) -> ExecuteFuture<'_> {
        let capture = self.handle(request);
        Box::pin(std::future::ready(Ok(capture)))
    }
}

/// Client whose every call fails at the transport level.
#[derive(Debug, Default)]
pub struct OfflineClient;

impl HttpClient for OfflineClient {
    fn execute(&self, _request: &ApiRequest) -> ExecuteFuture<'_> {
        Box::pin(std::future::ready(Err(HttpClientError::ConnectionFailed(
            "connection refused".to_string(),
        ))))
    }
}

fn json_body<T: serde::de::DeserializeOwned>(request: &ApiRequest) -> Option<T> {
    match &request.body {
        RequestBody::Json(value) => serde_json::from_value(value.clone()).ok(),
        _ => None,
    }
}

fn info(status: u16, outcome: &str, message: &str) -> ResponseCapture {
    respond(status, &json!({"info": {"status": outcome, "message": message}}))
}

fn respond(status: u16, body: &Value) -> ResponseCapture {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    ResponseCapture::new(status, headers, body.to_string().into_bytes(), Duration::ZERO)
}

fn raw(status: u16, bytes: Vec<u8>) -> ResponseCapture {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/octet-stream".to_string());
    ResponseCapture::new(status, headers, bytes, Duration::ZERO)
}
