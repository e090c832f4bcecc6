mod page;
mod pagination;
mod search_input;
mod status;
mod user_table;

pub use page::GitHubSearch;
pub use pagination::SearchPagination;
pub use search_input::SearchInput;
pub use status::SearchStatus;
pub use user_table::UserTable;
