//! In-memory search engine: filter, then sort, then paginate.
//!
//! The three steps are plain functions over borrowed entities so that only
//! the final page is cloned. Domain repositories plug in their own
//! [`SearchFilter`] and, optionally, a [`SortPolicy`].
use super::in_memory_repository::InMemoryRepository;
use crate::application::repositories::{
    Repository, SearchParams, SearchResult, SearchableRepository, SortDirection,
};
use crate::domain::{
    base::Entity,
    fields::{FieldSchema, SortableFields},
    DomainResult,
};
use async_trait::async_trait;
use std::cmp::Ordering;

/// Decides whether an entity matches a filter string
pub trait SearchFilter<E>: Send + Sync {
    fn matches(&self, entity: &E, filter: &str) -> bool;
}

/// Orders filtered entities for a search request
pub trait SortPolicy<E>: Send + Sync {
    fn sort<'a>(
        &self,
        items: Vec<&'a E>,
        fields: &SortableFields<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<&'a E>;
}

/// Sorts only when asked to, by a declared field
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSort;

impl<E: FieldSchema> SortPolicy<E> for DefaultSort {
    fn sort<'a>(
        &self,
        items: Vec<&'a E>,
        fields: &SortableFields<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<&'a E> {
        apply_sort(items, fields, sort, sort_dir)
    }
}

/// Like [`DefaultSort`], but falls back to a fixed field and direction when no sort is requested
#[derive(Debug, Clone, Copy)]
pub struct FallbackSort {
    field: &'static str,
    direction: SortDirection,
}

impl FallbackSort {
    pub fn new(field: &'static str, direction: SortDirection) -> Self {
        FallbackSort { field, direction }
    }
}

impl<E: FieldSchema> SortPolicy<E> for FallbackSort {
    fn sort<'a>(
        &self,
        items: Vec<&'a E>,
        fields: &SortableFields<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<&'a E> {
        match sort {
            None => apply_sort(items, fields, Some(self.field), Some(self.direction)),
            Some(_) => apply_sort(items, fields, sort, sort_dir),
        }
    }
}

/// Keep entities matching the filter, in their original relative order.
///
/// With no filter the input comes back untouched and `matcher` is never called.
pub fn apply_filter<'a, E>(
    items: Vec<&'a E>,
    filter: Option<&str>,
    matcher: &dyn SearchFilter<E>,
) -> Vec<&'a E> {
    match filter {
        None => items,
        Some(filter) => items
            .into_iter()
            .filter(|item| matcher.matches(item, filter))
            .collect(),
    }
}

/// Stable sort by a declared field; unknown or absent fields leave the order unchanged
pub fn apply_sort<'a, E: FieldSchema>(
    mut items: Vec<&'a E>,
    fields: &SortableFields<E>,
    sort: Option<&str>,
    sort_dir: Option<SortDirection>,
) -> Vec<&'a E> {
    let Some(sort) = sort.filter(|field| fields.contains(field)) else {
        return items;
    };
    let direction = sort_dir.unwrap_or(SortDirection::Asc);

    items.sort_by(|a, b| {
        let ordering = fields.compare(sort, a, b).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    items
}

/// Slice out `[(page - 1) * per_page, page * per_page)`; out of range gives an empty page
pub fn apply_paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}

/// In-memory repository with filter/sort/paginate search
pub struct InMemorySearchableRepository<E> {
    store: InMemoryRepository<E>,
    sortable_fields: SortableFields<E>,
    filter: Box<dyn SearchFilter<E>>,
    sort_policy: Box<dyn SortPolicy<E>>,
}

impl<E> InMemorySearchableRepository<E>
where
    E: Entity + FieldSchema + Clone + Send + Sync + 'static,
{
    pub fn new(filter: impl SearchFilter<E> + 'static, sortable_fields: SortableFields<E>) -> Self {
        InMemorySearchableRepository {
            store: InMemoryRepository::new(),
            sortable_fields,
            filter: Box::new(filter),
            sort_policy: Box::new(DefaultSort),
        }
    }

    pub fn with_sort_policy(mut self, sort_policy: impl SortPolicy<E> + 'static) -> Self {
        self.sort_policy = Box::new(sort_policy);
        self
    }

    /// Replace the stored collection
    pub fn with_items(mut self, items: Vec<E>) -> Self {
        self.store = InMemoryRepository::with_items(items);
        self
    }

    pub fn items(&self) -> &[E] {
        self.store.items()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn run_search(&self, params: &SearchParams) -> SearchResult<E> {
        let all: Vec<&E> = self.store.items().iter().collect();

        let filtered = apply_filter(all, params.filter(), self.filter.as_ref());
        let total = filtered.len();

        let sorted = self.sort_policy.sort(
            filtered,
            &self.sortable_fields,
            params.sort(),
            params.sort_dir(),
        );

        let page: Vec<E> = apply_paginate(sorted, params.page(), params.per_page())
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            "search page={} per_page={} sort={:?} filter={:?} -> {} of {} matches",
            params.page(),
            params.per_page(),
            params.sort(),
            params.filter(),
            page.len(),
            total
        );

        SearchResult::from_params(page, total, params)
    }
}

#[async_trait]
impl<E> Repository<E> for InMemorySearchableRepository<E>
where
    E: Entity + FieldSchema + Clone + Send + Sync + 'static,
{
    async fn insert(&mut self, entity: E) -> DomainResult<E> {
        self.store.insert(entity).await
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        self.store.find_all().await
    }

    async fn update(&mut self, entity: E) -> DomainResult<()> {
        self.store.update(entity).await
    }

    async fn delete(&mut self, id: &E::Id) -> DomainResult<()> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl<E> SearchableRepository<E> for InMemorySearchableRepository<E>
where
    E: Entity + FieldSchema + Clone + Send + Sync + 'static,
{
    fn sortable_fields(&self) -> &[&'static str] {
        self.sortable_fields.names()
    }

    async fn search(&self, params: &SearchParams) -> DomainResult<SearchResult<E>> {
        Ok(self.run_search(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::SearchInput;
    use crate::domain::{base::ValueObject, fields::FieldValue};
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct StubId(u32);
    impl ValueObject for StubId {}

    #[derive(Debug, Clone, PartialEq)]
    struct StubEntity {
        id: StubId,
        name: String,
        price: i64,
    }

    impl Entity for StubEntity {
        type Id = StubId;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    impl FieldSchema for StubEntity {
        const FIELDS: &'static [&'static str] = &["name", "price"];

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "name" => Some(FieldValue::Text(&self.name)),
                "price" => Some(FieldValue::Integer(self.price)),
                _ => None,
            }
        }
    }

    /// Name contains the filter (case-insensitive) or price equals it; counts calls
    #[derive(Clone, Default)]
    struct StubFilter {
        calls: Arc<AtomicUsize>,
    }

    impl SearchFilter<StubEntity> for StubFilter {
        fn matches(&self, entity: &StubEntity, filter: &str) -> bool {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            entity.name.to_lowercase().contains(&filter.to_lowercase())
                || entity.price.to_string() == filter
        }
    }

    fn stub(id: u32, name: &str) -> StubEntity {
        StubEntity {
            id: StubId(id),
            name: name.to_string(),
            price: 5,
        }
    }

    fn fields() -> SortableFields<StubEntity> {
        SortableFields::new(&["name"]).unwrap()
    }

    fn repository(items: Vec<StubEntity>) -> InMemorySearchableRepository<StubEntity> {
        InMemorySearchableRepository::new(StubFilter::default(), fields()).with_items(items)
    }

    fn names(items: &[StubEntity]) -> Vec<&str> {
        items.iter().map(|e| e.name.as_str()).collect()
    }

    fn refs(items: &[StubEntity]) -> Vec<&StubEntity> {
        items.iter().collect()
    }

    #[test]
    fn test_filter_is_not_called_without_filter() {
        let items = vec![stub(1, "name value")];
        let filter = StubFilter::default();

        let filtered = apply_filter(refs(&items), None, &filter);

        assert_eq!(filtered, refs(&items));
        assert_eq!(filter.calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_filter_keeps_matches_in_order() {
        let mut items = vec![stub(1, "test"), stub(2, "TEST"), stub(3, "fake")];
        items[2].price = 0;
        let filter = StubFilter::default();

        let filtered = apply_filter(refs(&items), Some("TEST"), &filter);
        assert_eq!(filtered, vec![&items[0], &items[1]]);

        let filtered = apply_filter(refs(&items), Some("5"), &filter);
        assert_eq!(filtered, vec![&items[0], &items[1]]);

        let filtered = apply_filter(refs(&items), Some("no-filter"), &filter);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_sort_leaves_order_without_valid_field() {
        let items = vec![stub(1, "b"), stub(2, "a")];

        let sorted = apply_sort(refs(&items), &fields(), None, None);
        assert_eq!(sorted, vec![&items[0], &items[1]]);

        // price is a real field but not declared sortable
        let sorted = apply_sort(refs(&items), &fields(), Some("price"), Some(SortDirection::Asc));
        assert_eq!(sorted, vec![&items[0], &items[1]]);
    }

    #[test]
    fn test_sort_by_declared_field() {
        let items = vec![stub(1, "b"), stub(2, "a"), stub(3, "c")];

        let asc = apply_sort(refs(&items), &fields(), Some("name"), Some(SortDirection::Asc));
        assert_eq!(asc, vec![&items[1], &items[0], &items[2]]);

        let desc = apply_sort(refs(&items), &fields(), Some("name"), Some(SortDirection::Desc));
        assert_eq!(desc, vec![&items[2], &items[0], &items[1]]);

        let reversed: Vec<_> = asc.into_iter().rev().collect();
        assert_eq!(reversed, desc);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let items = vec![stub(1, "x"), stub(2, "a"), stub(3, "x"), stub(4, "x")];

        let sorted = apply_sort(refs(&items), &fields(), Some("name"), Some(SortDirection::Asc));
        let ids: Vec<u32> = sorted.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);

        let sorted = apply_sort(refs(&items), &fields(), Some("name"), Some(SortDirection::Desc));
        let ids: Vec<u32> = sorted.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_fallback_sort_applies_only_without_sort() {
        let items = vec![stub(1, "b"), stub(2, "a"), stub(3, "c")];
        let policy = FallbackSort::new("name", SortDirection::Desc);

        let sorted = policy.sort(refs(&items), &fields(), None, None);
        assert_eq!(sorted, vec![&items[2], &items[0], &items[1]]);

        let sorted = policy.sort(refs(&items), &fields(), Some("price"), Some(SortDirection::Asc));
        assert_eq!(sorted, refs(&items));
    }

    #[test]
    fn test_paginate() {
        let items = vec!["a", "b", "c", "d", "e"];

        assert_eq!(apply_paginate(items.clone(), 1, 2), vec!["a", "b"]);
        assert_eq!(apply_paginate(items.clone(), 2, 2), vec!["c", "d"]);
        assert_eq!(apply_paginate(items.clone(), 3, 2), vec!["e"]);
        assert!(apply_paginate(items, 4, 2).is_empty());
    }

    #[tokio::test]
    async fn test_search_paginates_only_when_other_params_absent() {
        let items: Vec<StubEntity> = (0..16).map(|i| stub(i, "a")).collect();
        let repo = repository(items.clone());

        let result = repo.search(&SearchParams::default()).await.unwrap();

        assert_eq!(
            result,
            SearchResult::new(items[..15].to_vec(), 16, 1, 15)
        );
        assert_eq!(result.last_page, 2);
    }

    #[tokio::test]
    async fn test_search_without_filter_never_calls_filter() {
        let filter = StubFilter::default();
        let calls = Arc::clone(&filter.calls);
        let items = vec![stub(1, "c"), stub(2, "a"), stub(3, "b")];
        let repo = InMemorySearchableRepository::new(filter, fields()).with_items(items.clone());

        let result = repo.search(&SearchParams::default()).await.unwrap();

        assert_eq!(result.items, items);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_paginates_and_filters() {
        let items = vec![stub(1, "test"), stub(2, "a"), stub(3, "TEST"), stub(4, "TeSt")];
        let repo = repository(items.clone());

        let params = SearchParams::new(&SearchInput::new().with_page(1).with_per_page(2).with_filter("TEST"));
        let result = repo.search(&params).await.unwrap();
        assert_eq!(
            result,
            SearchResult::new(vec![items[0].clone(), items[2].clone()], 3, 1, 2)
                .with_filter(Some("TEST".to_string()))
        );

        let params = SearchParams::new(&SearchInput::new().with_page(2).with_per_page(2).with_filter("TEST"));
        let result = repo.search(&params).await.unwrap();
        assert_eq!(
            result,
            SearchResult::new(vec![items[3].clone()], 3, 2, 2).with_filter(Some("TEST".to_string()))
        );
    }

    #[tokio::test]
    async fn test_search_paginates_and_sorts() {
        let repo = repository(vec![
            stub(1, "b"),
            stub(2, "a"),
            stub(3, "d"),
            stub(4, "e"),
            stub(5, "c"),
        ]);

        let cases = vec![
            (SearchInput::new().with_page(1).with_per_page(2).with_sort("name"), vec!["a", "b"], SortDirection::Asc),
            (SearchInput::new().with_page(2).with_per_page(2).with_sort("name"), vec!["c", "d"], SortDirection::Asc),
            (
                SearchInput::new().with_page(1).with_per_page(2).with_sort("name").with_sort_dir("desc"),
                vec!["e", "d"],
                SortDirection::Desc,
            ),
            (
                SearchInput::new().with_page(2).with_per_page(2).with_sort("name").with_sort_dir("desc"),
                vec!["c", "b"],
                SortDirection::Desc,
            ),
        ];

        for (input, expected, direction) in cases {
            let result = repo.search(&SearchParams::new(&input)).await.unwrap();
            assert_eq!(names(&result.items), expected);
            assert_eq!(result.total, 5);
            assert_eq!(result.last_page, 3);
            assert_eq!(result.sort.as_deref(), Some("name"));
            assert_eq!(result.sort_order, Some(direction));
            assert_eq!(result.filter, None);
        }
    }

    #[tokio::test]
    async fn test_search_filters_sorts_and_paginates() {
        let items = vec![
            stub(1, "test"),
            stub(2, "a"),
            stub(3, "TEST"),
            stub(4, "e"),
            stub(5, "TeSt"),
        ];
        let repo = repository(items);

        let input = SearchInput::new()
            .with_page(1)
            .with_per_page(2)
            .with_sort("name")
            .with_filter("TEST");
        let result = repo.search(&SearchParams::new(&input)).await.unwrap();
        assert_eq!(names(&result.items), vec!["TEST", "TeSt"]);
        assert_eq!(result.total, 3);

        let input = SearchInput::new()
            .with_page(2)
            .with_per_page(2)
            .with_sort("name")
            .with_filter("TEST");
        let result = repo.search(&SearchParams::new(&input)).await.unwrap();
        assert_eq!(names(&result.items), vec!["test"]);
        assert_eq!(result.last_page, 2);
    }

    #[tokio::test]
    async fn test_search_with_no_matches() {
        let repo = repository(vec![stub(1, "a"), stub(2, "b")]);

        let params = SearchParams::new(&SearchInput::new().with_filter("zzz"));
        let result = repo.search(&params).await.unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.last_page, 0);
    }

    #[tokio::test]
    async fn test_search_out_of_range_page_is_empty() {
        let repo = repository(vec![stub(1, "a"), stub(2, "b")]);

        let params = SearchParams::new(&SearchInput::new().with_page(10).with_per_page(2));
        let result = repo.search(&params).await.unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total, 2);
        assert_eq!(result.current_page, 10);
    }

    #[tokio::test]
    async fn test_crud_delegates_to_store() {
        let mut repo = repository(Vec::new());

        repo.insert(stub(1, "a")).await.unwrap();
        repo.insert(stub(2, "b")).await.unwrap();
        repo.update(stub(1, "changed")).await.unwrap();
        repo.delete(&StubId(2)).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![stub(1, "changed")]);
        assert_eq!(repo.sortable_fields(), &["name"]);
    }
}
