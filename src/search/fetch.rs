use crate::github::{GitHubError, GitHubUser, UserSource};
use crate::search::state::FetchTicket;
use std::time::Duration;
use tracing::debug;

/// Outcome of driving one ticket
#[derive(Debug)]
pub enum FetchOutcome {
    /// A newer ticket was issued while this one waited out the debounce
    Superseded,
    Finished(Result<Vec<GitHubUser>, GitHubError>),
}

/// Wait out the debounce window (if the ticket asks for it), then load the
/// users for the ticket's endpoint.
///
/// `is_current` is consulted after the wait so a burst of keystrokes results
/// in a single request for the settled query.
pub async fn run_fetch(
    source: &dyn UserSource,
    ticket: &FetchTicket,
    debounce: Duration,
    is_current: impl Fn(&FetchTicket) -> bool,
) -> FetchOutcome {
    if ticket.debounce && !debounce.is_zero() {
        tokio::time::sleep(debounce).await;

        if !is_current(ticket) {
            debug!("Fetch #{} superseded during debounce", ticket.generation);
            return FetchOutcome::Superseded;
        }
    }

    FetchOutcome::Finished(source.fetch_users(&ticket.endpoint).await)
}
