use crate::application::{
    dto::{CategoryOutput, CreateCategoryInput},
    repositories::CategoryRepository,
};
use crate::domain::entities::{Category, CategoryProps};

use super::error::ApplicationResult;

/// Use case for creating a category
///
/// Builds and validates a new category with a fresh id, then stores it.
pub struct CreateCategory<'a, R: CategoryRepository> {
    repository: &'a mut R,
}

impl<'a, R: CategoryRepository> CreateCategory<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub async fn execute(&mut self, input: CreateCategoryInput) -> ApplicationResult<CategoryOutput> {
        let category = Category::new(
            CategoryProps {
                name: input.name,
                description: input.description,
                is_active: input.is_active,
                created_at: None,
            },
            None,
        )?;

        let category = self.repository.insert(category).await?;
        Ok(CategoryOutput::from(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::ApplicationError;
    use crate::domain::base::DomainError;
    use crate::infrastructure::persistence::CategoryRepositoryInMemory;

    #[tokio::test]
    async fn test_create_category() {
        let mut repository = CategoryRepositoryInMemory::new();

        let output = CreateCategory::new(&mut repository)
            .execute(CreateCategoryInput::new("test"))
            .await
            .unwrap();

        assert_eq!(repository.len(), 1);
        let stored = &repository.items()[0];
        assert_eq!(output, CategoryOutput::from(stored));
        assert_eq!(output.name, "test");
        assert_eq!(output.description, None);
        assert!(output.is_active);
    }

    #[tokio::test]
    async fn test_create_category_with_all_fields() {
        let mut repository = CategoryRepositoryInMemory::new();
        let input = CreateCategoryInput {
            name: "test".to_string(),
            description: Some("some description".to_string()),
            is_active: Some(false),
        };

        let output = CreateCategory::new(&mut repository)
            .execute(input)
            .await
            .unwrap();

        assert_eq!(output.description.as_deref(), Some("some description"));
        assert!(!output.is_active);
        assert_eq!(output, CategoryOutput::from(&repository.items()[0]));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name() {
        let mut repository = CategoryRepositoryInMemory::new();

        let error = CreateCategory::new(&mut repository)
            .execute(CreateCategoryInput::new(""))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ApplicationError::Domain(DomainError::Validation(_))
        ));
        assert!(repository.is_empty());
    }
}
