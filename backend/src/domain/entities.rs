/// Domain entities
use super::base::{DomainResult, Entity};
use super::fields::{FieldSchema, FieldValue};
use super::validators::CategoryValidator;
use super::value_objects::UniqueEntityId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Construction input for a Category; absent fields take their defaults
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        CategoryProps {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// A Category groups catalog items under a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: UniqueEntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a category, generating an id when none is given
    pub fn new(props: CategoryProps, id: Option<UniqueEntityId>) -> DomainResult<Self> {
        CategoryValidator::check(&props.name)?;

        Ok(Category {
            id: id.unwrap_or_else(UniqueEntityId::generate),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename the category; the description only changes when a non-empty one is given
    pub fn update(&mut self, name: impl Into<String>, description: Option<String>) -> DomainResult<()> {
        let name = name.into();
        CategoryValidator::check(&name)?;

        self.name = name;
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            self.description = Some(description);
        }
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Entity for Category {
    type Id = UniqueEntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl FieldSchema for Category {
    const FIELDS: &'static [&'static str] = &["id", "name", "description", "isActive", "createdAt"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "name" => Some(FieldValue::Text(&self.name)),
            "description" => Some(FieldValue::from_option(
                self.description.as_deref(),
                FieldValue::Text,
            )),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}
