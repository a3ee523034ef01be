//! The contract every CRUD-exposed entity implements.
//!
//! A `Resource` knows its display name, how to read and assign its
//! store-generated identifier, and which fields must be present and
//! non-zero before it may be inserted. Everything else about create, read,
//! update and delete is generic.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use crate::errors::ValidationError;

/// Entity description consumed by the generic service, repository and handlers
pub trait Resource:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Display name used in messages and log fields, e.g. `"Tenant"`
    const NAME: &'static str;

    /// Store-assigned identifier, `None` until inserted
    fn id(&self) -> Option<i64>;

    /// Record the identifier the store generated on insert
    fn set_id(&mut self, id: i64);

    /// Required-field rule applied before insert
    fn validate_new(&self) -> Result<(), ValidationError>;
}

/// Values that count as "missing" for the required-field rule
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for i64 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Blank::is_blank)
    }
}

/// Fail with `EmptyValue` when `value` is zero or empty
pub fn require<T: Blank + ?Sized>(field: &str, value: &T) -> Result<(), ValidationError> {
    if value.is_blank() {
        return Err(ValidationError::empty(field));
    }
    Ok(())
}
