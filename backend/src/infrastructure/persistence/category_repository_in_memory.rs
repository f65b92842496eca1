use super::searchable_repository::{FallbackSort, InMemorySearchableRepository, SearchFilter};
use crate::application::repositories::{
    Repository, SearchParams, SearchResult, SearchableRepository, SortDirection,
};
use crate::domain::{
    entities::Category, fields::SortableFields, value_objects::UniqueEntityId, DomainResult,
};
use async_trait::async_trait;

/// Fields a category listing may be sorted by
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "createdAt"];

/// Matches categories whose name contains the filter, ignoring case
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryNameFilter;

impl SearchFilter<Category> for CategoryNameFilter {
    fn matches(&self, category: &Category, filter: &str) -> bool {
        category
            .name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// Category repository kept entirely in memory
///
/// Unsorted listings come back newest first.
pub struct CategoryRepositoryInMemory {
    inner: InMemorySearchableRepository<Category>,
}

impl CategoryRepositoryInMemory {
    pub fn new() -> Self {
        let sortable_fields = SortableFields::new(CATEGORY_SORTABLE_FIELDS)
            .expect("category sortable fields are declared on Category");

        CategoryRepositoryInMemory {
            inner: InMemorySearchableRepository::new(CategoryNameFilter, sortable_fields)
                .with_sort_policy(FallbackSort::new("createdAt", SortDirection::Desc)),
        }
    }

    pub fn with_items(mut self, items: Vec<Category>) -> Self {
        self.inner = self.inner.with_items(items);
        self
    }

    pub fn items(&self) -> &[Category] {
        self.inner.items()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for CategoryRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Category> for CategoryRepositoryInMemory {
    async fn insert(&mut self, category: Category) -> DomainResult<Category> {
        self.inner.insert(category).await
    }

    async fn find_by_id(&self, id: &UniqueEntityId) -> DomainResult<Option<Category>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        self.inner.find_all().await
    }

    async fn update(&mut self, category: Category) -> DomainResult<()> {
        self.inner.update(category).await
    }

    async fn delete(&mut self, id: &UniqueEntityId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

#[async_trait]
impl SearchableRepository<Category> for CategoryRepositoryInMemory {
    fn sortable_fields(&self) -> &[&'static str] {
        self.inner.sortable_fields()
    }

    async fn search(&self, params: &SearchParams) -> DomainResult<SearchResult<Category>> {
        self.inner.search(params).await
    }
}
