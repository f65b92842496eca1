use crate::application::repositories::{SearchParams, SearchResult, SearchableRepository};
use crate::domain::entities::Category;

pub type CategoryFilter = String;

pub type CategorySearchParams = SearchParams;

pub type CategorySearchResult = SearchResult<Category>;

/// Searchable repository of categories
pub trait CategoryRepository: SearchableRepository<Category> {}

impl<T: SearchableRepository<Category>> CategoryRepository for T {}
