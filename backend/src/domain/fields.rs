//! Typed access to named entity fields.
//!
//! Repositories sort and filter by field name. Entities expose their fields
//! through [`FieldSchema`], and a repository declares which of those names
//! are legal sort targets through [`SortableFields`], which is checked
//! against the schema when it is built.
use super::base::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A borrowed view of a single field value.
///
/// Values of the same kind compare naturally. Text compares by code point,
/// so upper-case letters sort before lower-case ones. Values of different
/// kinds compare by kind, with `Null` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Integer(i64),
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    pub fn from_option<T>(value: Option<T>, f: impl FnOnce(T) -> FieldValue<'a>) -> Self {
        value.map(f).unwrap_or(FieldValue::Null)
    }
}

/// Named, typed fields of an entity
pub trait FieldSchema {
    /// Every field name `field` can resolve
    const FIELDS: &'static [&'static str];

    /// Look up a field by name, `None` if the entity has no such field
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn has_field(name: &str) -> bool {
        Self::FIELDS.iter().any(|field| *field == name)
    }
}

/// Field names a repository accepts as sort targets
pub struct SortableFields<E> {
    names: Vec<&'static str>,
    _entity: PhantomData<fn(&E)>,
}

impl<E: FieldSchema> SortableFields<E> {
    /// Declare sort targets, rejecting names the entity does not expose
    pub fn new(names: &[&'static str]) -> DomainResult<Self> {
        if let Some(unknown) = names.iter().find(|name| !E::has_field(name)) {
            return Err(DomainError::InvalidValue(format!(
                "'{}' is not a field of this entity",
                unknown
            )));
        }

        Ok(SortableFields {
            names: names.to_vec(),
            _entity: PhantomData,
        })
    }

    /// No sortable fields at all
    pub fn none() -> Self {
        SortableFields {
            names: Vec::new(),
            _entity: PhantomData,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Compare two entities by a declared field
    ///
    /// Returns `None` when the field is not declared sortable.
    pub fn compare(&self, name: &str, a: &E, b: &E) -> Option<Ordering> {
        if !self.contains(name) {
            return None;
        }
        let left = a.field(name).unwrap_or(FieldValue::Null);
        let right = b.field(name).unwrap_or(FieldValue::Null);
        Some(left.cmp(&right))
    }
}

impl<E> Clone for SortableFields<E> {
    fn clone(&self) -> Self {
        SortableFields {
            names: self.names.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for SortableFields<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SortableFields").field(&self.names).finish()
    }
}
