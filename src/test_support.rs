// Test support utilities for both unit and integration tests

use crate::github::{Endpoint, GitHubError, GitHubUser, UserId, UserSource};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// Build `count` users with ids 1..=count
pub fn sample_users(count: u64) -> Vec<GitHubUser> {
    (1..=count)
        .map(|id| GitHubUser {
            id: UserId::Number(id),
            login: format!("user{}", id),
            avatar_url: format!("https://avatars.githubusercontent.com/u/{}?v=4", id),
            html_url: format!("https://github.com/user{}", id),
        })
        .collect()
}

enum Scripted {
    Users(Vec<GitHubUser>),
    Status(StatusCode),
}

/// Mock user source for testing
///
/// Serves scripted responses per endpoint instead of calling GitHub and
/// records every request it receives. Unknown endpoints answer 404.
#[derive(Default)]
pub struct MockUserSource {
    responses: Mutex<HashMap<Endpoint, Scripted>>,
    requests: Mutex<Vec<Endpoint>>,
}

impl MockUserSource {
    /// Create a new mock user source
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, endpoint: &Endpoint, count: u64) -> Self {
        self.respond_with(endpoint, sample_users(count));
        self
    }

    pub fn with_status(self, endpoint: &Endpoint, status: StatusCode) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.clone(), Scripted::Status(status));
        self
    }

    pub fn respond_with(&self, endpoint: &Endpoint, users: Vec<GitHubUser>) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.clone(), Scripted::Users(users));
    }

    /// Endpoints requested so far, in order
    pub fn requests(&self) -> Vec<Endpoint> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl UserSource for MockUserSource {
    async fn fetch_users(&self, endpoint: &Endpoint) -> Result<Vec<GitHubUser>, GitHubError> {
        self.requests.lock().unwrap().push(endpoint.clone());

        match self.responses.lock().unwrap().get(endpoint) {
            Some(Scripted::Users(users)) => Ok(users.clone()),
            Some(Scripted::Status(status)) => Err(GitHubError::Status {
                status: *status,
                body: String::new(),
            }),
            None => Err(GitHubError::Status {
                status: StatusCode::NOT_FOUND,
                body: format!("no mock for {}", endpoint.path_and_query()),
            }),
        }
    }
}
