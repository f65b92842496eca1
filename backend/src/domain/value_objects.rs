/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier shared by every entity.
///
/// Always holds a hyphenated UUID string. Generated ids are random (v4);
/// supplied ids are checked before they are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId(String);

impl UniqueEntityId {
    /// Create an id from an existing UUID string
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        match Uuid::parse_str(&id) {
            Ok(uuid) => Ok(UniqueEntityId(uuid.hyphenated().to_string())),
            Err(_) => Err(DomainError::InvalidUuid(id)),
        }
    }

    /// Create a fresh random id
    pub fn generate() -> Self {
        UniqueEntityId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::generate()
    }
}

impl ValueObject for UniqueEntityId {}

impl fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UniqueEntityId> for String {
    fn from(value: UniqueEntityId) -> Self {
        value.0
    }
}
