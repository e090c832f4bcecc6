//! Search state and the fetch driver behind the users table.
//!
//! [`SearchState`] is renderer-independent: the UI keeps it in a signal and
//! feeds it the outcome of [`run_fetch`]. Each fetch is identified by a
//! [`FetchTicket`] generation so late responses for an outdated query are
//! dropped.

mod fetch;
mod state;

pub use fetch::{run_fetch, FetchOutcome};
pub use state::{FetchTicket, SearchState, FETCH_ERROR_MESSAGE};
