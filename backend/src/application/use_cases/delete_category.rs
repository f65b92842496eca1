use crate::application::{dto::DeleteCategoryInput, repositories::CategoryRepository};
use crate::domain::base::Entity;

use super::error::ApplicationResult;
use super::get_category::find_category;

/// Use case for removing a category
pub struct DeleteCategory<'a, R: CategoryRepository> {
    repository: &'a mut R,
}

impl<'a, R: CategoryRepository> DeleteCategory<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Delete the category, failing with NotFound if it does not exist
    pub async fn execute(&mut self, input: DeleteCategoryInput) -> ApplicationResult<()> {
        let category = find_category(&*self.repository, &input.id).await?;
        self.repository.delete(category.id()).await?;
        Ok(())
    }
}
