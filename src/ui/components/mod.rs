pub mod app;
pub mod github_search;

pub use app::App;
pub use github_search::*;
