pub mod category;
pub mod search;

pub use category::{
    CategoryOutput, CreateCategoryInput, DeleteCategoryInput, GetCategoryInput,
    ListCategoriesInput, ListCategoriesOutput, UpdateCategoryInput,
};
pub use search::{PaginationOutput, SearchInput};
