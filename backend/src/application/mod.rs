pub mod dto;
pub mod repositories;
pub mod services;
pub mod use_cases;

pub use dto::{
    CategoryOutput, CreateCategoryInput, DeleteCategoryInput, GetCategoryInput,
    ListCategoriesInput, ListCategoriesOutput, PaginationOutput, SearchInput,
    UpdateCategoryInput,
};
pub use repositories::{
    CategoryRepository, Repository, SearchParams, SearchResult, SearchableRepository,
    SortDirection,
};
pub use services::{CategoryService, ImportSummary};
pub use use_cases::{
    ApplicationError, ApplicationResult, CreateCategory, DeleteCategory, GetCategory,
    ListCategories, UpdateCategory,
};
