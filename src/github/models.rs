use serde::Deserialize;
use std::fmt;

/// GitHub user identifier
///
/// The REST API returns numeric ids, but mirrors and fixtures sometimes
/// serialize them as strings; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

/// A user as listed by `/users` or `/search/users`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GitHubUser {
    pub id: UserId,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// Body of a users response
///
/// The search endpoint wraps users in `{ "items": [...] }` while the listing
/// endpoint returns a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UsersResponse {
    Search { items: Vec<GitHubUser> },
    Listing(Vec<GitHubUser>),
}

impl UsersResponse {
    pub(crate) fn into_users(self) -> Vec<GitHubUser> {
        match self {
            UsersResponse::Search { items } => items,
            UsersResponse::Listing(users) => users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_is_unwrapped_from_items() {
        let body = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [
                {"id": 583231, "login": "octocat", "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4", "html_url": "https://github.com/octocat", "score": 1.0}
            ]
        }"#;

        let users = serde_json::from_str::<UsersResponse>(body)
            .unwrap()
            .into_users();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].login, "octocat");
        assert_eq!(users[0].id, UserId::Number(583231));
    }

    #[test]
    fn listing_body_is_a_bare_array() {
        let body = r#"[
            {"id": 1, "login": "mojombo", "avatar_url": "a", "html_url": "https://github.com/mojombo"},
            {"id": 2, "login": "defunkt", "avatar_url": "b", "html_url": "https://github.com/defunkt"}
        ]"#;

        let users = serde_json::from_str::<UsersResponse>(body)
            .unwrap()
            .into_users();

        let logins: Vec<_> = users.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["mojombo", "defunkt"]);
    }

    #[test]
    fn string_ids_are_accepted() {
        let body = r#"[{"id": "42", "login": "x", "avatar_url": "a", "html_url": "h"}]"#;

        let users = serde_json::from_str::<UsersResponse>(body)
            .unwrap()
            .into_users();

        assert_eq!(users[0].id, UserId::Text("42".to_string()));
        assert_eq!(users[0].id.to_string(), "42");
    }

    #[test]
    fn object_without_items_is_rejected() {
        let body = r#"{"message": "API rate limit exceeded"}"#;
        assert!(serde_json::from_str::<UsersResponse>(body).is_err());
    }
}
