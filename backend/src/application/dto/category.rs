use crate::application::dto::{PaginationOutput, SearchInput};
use crate::domain::{base::Entity, entities::Category};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category as returned by every use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        CategoryOutput {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        CategoryOutput::from(&category)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        CreateCategoryInput {
            name: name.into(),
            description: None,
            is_active: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetCategoryInput {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        UpdateCategoryInput {
            id: id.into(),
            name: name.into(),
            description: None,
            is_active: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCategoryInput {
    pub id: String,
}

pub type ListCategoriesInput = SearchInput;

pub type ListCategoriesOutput = PaginationOutput<CategoryOutput>;
