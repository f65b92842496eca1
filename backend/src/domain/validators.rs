/// Field-level validation for domain entities
use super::base::{DomainError, DomainResult, FieldErrors};
use validator::{Validate, ValidationError, ValidationErrors};

pub const CATEGORY_NAME_MAX_LENGTH: usize = 255;

/// Rules checked whenever a category is created or renamed
#[derive(Debug, Validate)]
pub struct CategoryRules {
    #[validate(
        length(min = 1, message = "name should not be empty"),
        custom(function = "name_within_limit")
    )]
    pub name: String,
}

fn name_within_limit(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > CATEGORY_NAME_MAX_LENGTH {
        let mut error = ValidationError::new("max_length");
        error.message = Some(
            format!(
                "name must be shorter than or equal to {} characters",
                CATEGORY_NAME_MAX_LENGTH
            )
            .into(),
        );
        return Err(error);
    }
    Ok(())
}

/// Convert `validator` errors into field-keyed messages
pub fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid ({})", field, error.code));
            fields.add(field.to_string(), message);
        }
    }
    fields
}

pub struct CategoryValidator;

impl CategoryValidator {
    pub fn validate(name: &str) -> Result<(), FieldErrors> {
        let rules = CategoryRules {
            name: name.to_string(),
        };
        rules.validate().map_err(|e| to_field_errors(&e))
    }

    /// Same check, surfaced as a domain error
    pub fn check(name: &str) -> DomainResult<()> {
        Self::validate(name).map_err(DomainError::Validation)
    }
}
