use crate::application::{
    dto::{CategoryOutput, GetCategoryInput},
    repositories::CategoryRepository,
};
use crate::domain::{entities::Category, value_objects::UniqueEntityId};

use super::error::{ApplicationError, ApplicationResult};

/// Look up a category by its raw id.
///
/// An id that is not a valid UUID cannot match anything, so it reports the
/// same NotFound as a missing category.
pub(crate) async fn find_category<R: CategoryRepository>(
    repository: &R,
    id: &str,
) -> ApplicationResult<Category> {
    let id = UniqueEntityId::new(id).map_err(|_| ApplicationError::category_not_found())?;

    repository
        .find_by_id(&id)
        .await?
        .ok_or_else(ApplicationError::category_not_found)
}

/// Use case for fetching a single category
pub struct GetCategory<'a, R: CategoryRepository> {
    repository: &'a R,
}

impl<'a, R: CategoryRepository> GetCategory<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: GetCategoryInput) -> ApplicationResult<CategoryOutput> {
        let category = find_category(self.repository, &input.id).await?;
        Ok(CategoryOutput::from(category))
    }
}
