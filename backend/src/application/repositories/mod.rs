pub mod category_repository;
pub mod repository;
pub mod search;

pub use category_repository::{
    CategoryFilter, CategoryRepository, CategorySearchParams, CategorySearchResult,
};
pub use repository::{Repository, SearchableRepository};
pub use search::{
    last_page, PerPageInput, SearchParams, SearchResult, SortDirection, DEFAULT_PAGE,
    DEFAULT_PER_PAGE,
};
