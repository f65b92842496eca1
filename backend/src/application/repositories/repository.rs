use crate::application::repositories::search::{SearchParams, SearchResult};
use crate::domain::{base::Entity, DomainResult};
use async_trait::async_trait;

/// Repository trait for storing and retrieving entities.
///
/// The methods are async so an in-memory implementation can be swapped for a
/// persistent one without changing callers. A missing entity is never an
/// error at this level: `find_by_id` returns `Ok(None)` and `update`/`delete`
/// do nothing. Callers decide whether absence is a failure.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync + 'static,
{
    /// Appends an entity and returns it. Duplicate ids are not rejected.
    async fn insert(&mut self, entity: E) -> DomainResult<E>;

    /// Finds an entity by its unique identifier.
    ///
    /// Returns `Ok(Some(entity))` if found, `Ok(None)` if not found.
    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>>;

    /// Returns every entity in the repository, in stored order.
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    /// Replaces the stored entity with the same id; no-op if none matches.
    async fn update(&mut self, entity: E) -> DomainResult<()>;

    /// Removes every entity with the given id; no-op if none matches.
    async fn delete(&mut self, id: &E::Id) -> DomainResult<()>;
}

/// A repository that can filter, sort and paginate its entities
#[async_trait]
pub trait SearchableRepository<E>: Repository<E>
where
    E: Entity + Send + Sync + 'static,
{
    /// Field names accepted as sort targets
    fn sortable_fields(&self) -> &[&'static str];

    /// Filter, then sort, then paginate.
    ///
    /// `total` in the result counts filtered entities before pagination.
    async fn search(&self, params: &SearchParams) -> DomainResult<SearchResult<E>>;
}
