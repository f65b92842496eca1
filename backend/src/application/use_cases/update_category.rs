use crate::application::{
    dto::{CategoryOutput, UpdateCategoryInput},
    repositories::CategoryRepository,
};

use super::error::ApplicationResult;
use super::get_category::find_category;

/// Use case for renaming, describing and toggling a category
pub struct UpdateCategory<'a, R: CategoryRepository> {
    repository: &'a mut R,
}

impl<'a, R: CategoryRepository> UpdateCategory<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Apply the update and persist it
    ///
    /// `is_active` of `Some(true)` activates, `Some(false)` deactivates and
    /// `None` leaves the flag alone. The description only changes when a
    /// non-empty one is given.
    pub async fn execute(&mut self, input: UpdateCategoryInput) -> ApplicationResult<CategoryOutput> {
        let mut category = find_category(&*self.repository, &input.id).await?;

        category.update(input.name, input.description)?;

        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        self.repository.update(category.clone()).await?;
        Ok(CategoryOutput::from(category))
    }
}
