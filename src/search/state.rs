use crate::github::{Endpoint, GitHubError, GitHubUser};
use crate::pagination::Paginator;
use tracing::{debug, error};

/// Banner text shown for any failed fetch
pub const FETCH_ERROR_MESSAGE: &str =
    "Error fetching data from GitHub API. Please try again later.";

/// Handle for one issued fetch
///
/// Only the ticket with the latest generation may update the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub endpoint: Endpoint,
    /// Whether the request should wait out the debounce window first
    pub debounce: bool,
}

/// Query, results, loading/error flags and page state of the search view
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    query: String,
    results: Vec<GitHubUser>,
    loading: bool,
    error: Option<String>,
    pages: Paginator,
    generation: u64,
}

impl SearchState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            loading: false,
            error: None,
            pages: Paginator::new(page_size),
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[GitHubUser] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pages(&self) -> &Paginator {
        &self.pages
    }

    /// Users on the current page
    pub fn visible_users(&self) -> &[GitHubUser] {
        self.pages.slice(&self.results)
    }

    /// Start the initial load of the default listing
    pub fn begin_initial_fetch(&mut self) -> FetchTicket {
        let query = self.query.clone();
        self.issue(query, false)
    }

    /// Record a new query and issue a fetch for it, superseding any fetch
    /// still in flight
    pub fn begin_fetch(&mut self, query: impl Into<String>) -> FetchTicket {
        self.issue(query.into(), true)
    }

    /// Apply the text of the search box. Returns None when it matches the
    /// current query, so re-entering the same text costs no request.
    pub fn update_query(&mut self, query: impl Into<String>) -> Option<FetchTicket> {
        let query = query.into();
        if query == self.query {
            return None;
        }
        Some(self.begin_fetch(query))
    }

    fn issue(&mut self, query: String, debounce: bool) -> FetchTicket {
        self.generation += 1;
        self.query = query;
        self.loading = true;
        self.error = None;

        let endpoint = Endpoint::resolve(&self.query);
        debug!(
            "Issuing fetch #{} for {:?}",
            self.generation,
            endpoint.path_and_query()
        );

        FetchTicket {
            generation: self.generation,
            endpoint,
            debounce,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of a fetch. Stale tickets are dropped and the
    /// method returns false.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<GitHubUser>, GitHubError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale fetch #{} (current is #{})",
                ticket.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(users) => {
                self.pages.set_total(users.len());
                self.results = users;
            }
            Err(e) => {
                error!("Error fetching data from GitHub API: {}", e);
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }

        self.loading = false;
        true
    }

    /// Returns false when `page` is out of range.
    pub fn paginate(&mut self, page: usize) -> bool {
        self.pages.paginate(page)
    }
}
