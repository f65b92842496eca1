mod category_repository_in_memory;
mod in_memory_repository;
mod searchable_repository;

pub use category_repository_in_memory::{
    CategoryNameFilter, CategoryRepositoryInMemory, CATEGORY_SORTABLE_FIELDS,
};
pub use in_memory_repository::InMemoryRepository;
pub use searchable_repository::{
    apply_filter, apply_paginate, apply_sort, DefaultSort, FallbackSort,
    InMemorySearchableRepository, SearchFilter, SortPolicy,
};
