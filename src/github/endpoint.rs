/// Page size requested from the listing endpoint
const LISTING_PER_PAGE: u32 = 1000;
const SORT_BY: &str = "followers";

/// GitHub endpoint selected for a search query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /search/users?q={query}&sort=followers`
    Search { query: String },
    /// `GET /users?per_page=1000&sort=followers`
    Listing,
}

impl Endpoint {
    /// Pick the endpoint for a free-text query.
    ///
    /// Whitespace-only queries fall back to the default listing.
    pub fn resolve(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            Endpoint::Listing
        } else {
            Endpoint::Search {
                query: query.to_string(),
            }
        }
    }

    /// Path and query string, relative to the API root
    pub fn path_and_query(&self) -> String {
        match self {
            Endpoint::Search { query } => format!(
                "/search/users?q={}&sort={}",
                urlencoding::encode(query),
                SORT_BY
            ),
            Endpoint::Listing => {
                format!("/users?per_page={}&sort={}", LISTING_PER_PAGE, SORT_BY)
            }
        }
    }

    /// Absolute URL against the given API root
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path_and_query())
    }
}
