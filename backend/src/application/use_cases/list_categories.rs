use crate::application::{
    dto::{CategoryOutput, ListCategoriesInput, ListCategoriesOutput, PaginationOutput},
    repositories::{CategoryRepository, SearchParams},
};

use super::error::ApplicationResult;

/// Use case for listing categories page by page
///
/// Raw input is normalized into search parameters first, so malformed paging
/// values fall back to their defaults rather than failing.
pub struct ListCategories<'a, R: CategoryRepository> {
    repository: &'a R,
}

impl<'a, R: CategoryRepository> ListCategories<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: &ListCategoriesInput) -> ApplicationResult<ListCategoriesOutput> {
        let params = SearchParams::new(input);
        let result = self.repository.search(&params).await?;
        Ok(PaginationOutput::from_result(result, CategoryOutput::from))
    }
}
