/// Shared, lock-guarded access to a category repository
use crate::application::dto::{
    CategoryOutput, CreateCategoryInput, DeleteCategoryInput, GetCategoryInput,
    ListCategoriesInput, ListCategoriesOutput, UpdateCategoryInput,
};
use crate::application::repositories::CategoryRepository;
use crate::application::use_cases::{
    ApplicationResult, CreateCategory, DeleteCategory, GetCategory, ListCategories,
    UpdateCategory,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Outcome of creating a batch of categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub total: usize,
    pub created: usize,
    /// Index into the batch and the error it failed with
    pub errors: Vec<(usize, String)>,
}

impl ImportSummary {
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.created as f64 / self.total as f64) * 100.0
    }
}

/// Cloneable handle over a category repository
///
/// Every operation takes the lock for its whole duration, so mutations are
/// applied one at a time and a listing never sees a half-applied change.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<Mutex<R>>,
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        CategoryService {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        CategoryService {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    pub async fn create(&self, input: CreateCategoryInput) -> ApplicationResult<CategoryOutput> {
        let mut repo = self.repository.lock().await;
        let output = CreateCategory::new(&mut *repo).execute(input).await?;
        tracing::info!("Created category {} ({})", output.id, output.name);
        Ok(output)
    }

    pub async fn get(&self, input: GetCategoryInput) -> ApplicationResult<CategoryOutput> {
        let repo = self.repository.lock().await;
        GetCategory::new(&*repo).execute(input).await
    }

    pub async fn update(&self, input: UpdateCategoryInput) -> ApplicationResult<CategoryOutput> {
        let mut repo = self.repository.lock().await;
        let output = UpdateCategory::new(&mut *repo).execute(input).await?;
        tracing::info!("Updated category {}", output.id);
        Ok(output)
    }

    pub async fn delete(&self, input: DeleteCategoryInput) -> ApplicationResult<()> {
        let id = input.id.clone();
        let mut repo = self.repository.lock().await;
        DeleteCategory::new(&mut *repo).execute(input).await?;
        tracing::info!("Deleted category {}", id);
        Ok(())
    }

    pub async fn list(&self, input: &ListCategoriesInput) -> ApplicationResult<ListCategoriesOutput> {
        let repo = self.repository.lock().await;
        ListCategories::new(&*repo).execute(input).await
    }

    /// Create each entry in order, collecting failures instead of stopping
    pub async fn import(&self, entries: Vec<CreateCategoryInput>) -> ImportSummary {
        let mut summary = ImportSummary {
            total: entries.len(),
            ..Default::default()
        };

        let mut repo = self.repository.lock().await;
        for (index, entry) in entries.into_iter().enumerate() {
            match CreateCategory::new(&mut *repo).execute(entry).await {
                Ok(_) => summary.created += 1,
                Err(e) => {
                    tracing::warn!("Skipping category #{}: {}", index, e);
                    summary.errors.push((index, e.to_string()));
                }
            }
        }

        tracing::info!(
            "Imported {}/{} categories ({:.1}%)",
            summary.created,
            summary.total,
            summary.success_rate()
        );
        summary
    }
}
