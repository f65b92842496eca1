use crate::application::repositories::Repository;
use crate::domain::{base::Entity, DomainResult};
use async_trait::async_trait;

/// Vec-backed implementation of the Repository trait
///
/// Keeps entities in insertion order. Lookups are linear scans.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: Vec<E>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        InMemoryRepository { items: Vec::new() }
    }

    /// Start from an existing collection, keeping its order
    pub fn with_items(items: Vec<E>) -> Self {
        InMemoryRepository { items }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync + 'static,
{
    async fn insert(&mut self, entity: E) -> DomainResult<E> {
        self.items.push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        Ok(self.items.iter().find(|item| item.id() == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.items.clone())
    }

    async fn update(&mut self, entity: E) -> DomainResult<()> {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == entity.id()) {
            *slot = entity;
        }
        Ok(())
    }

    async fn delete(&mut self, id: &E::Id) -> DomainResult<()> {
        self.items.retain(|item| item.id() != id);
        Ok(())
    }
}
