pub mod client;
pub mod endpoint;
pub mod models;

pub use client::{GitHubClient, GitHubError, UserSource};
pub use endpoint::Endpoint;
pub use models::{GitHubUser, UserId};
