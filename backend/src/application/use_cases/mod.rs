pub mod create_category;
pub mod delete_category;
pub mod error;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub use create_category::CreateCategory;
pub use delete_category::DeleteCategory;
pub use error::{ApplicationError, ApplicationResult};
pub use get_category::GetCategory;
pub use list_categories::ListCategories;
pub use update_category::UpdateCategory;
