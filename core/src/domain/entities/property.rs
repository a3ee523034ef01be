//! Property and PropertyUnit entities.

use serde::{Deserialize, Serialize};

use crate::domain::resource::{require, Resource};
use crate::errors::ValidationError;

/// A building or lot owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning user; the foreign key is enforced by the store
    #[serde(default)]
    pub owner_user_id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub zip: String,

    #[serde(default)]
    pub property_type: String,

    #[serde(default)]
    pub year_built: i64,

    #[serde(default)]
    pub notes: String,
}

impl Resource for Property {
    const NAME: &'static str = "Property";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A rentable unit inside a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub property_id: i64,

    #[serde(default)]
    pub unit_number: String,

    #[serde(default)]
    pub beds: i64,

    #[serde(default)]
    pub baths: i64,

    #[serde(default)]
    pub sqft: i64,

    /// Default monthly rent in minor currency units
    #[serde(default)]
    pub default_rent: i64,

    #[serde(default)]
    pub notes: String,
}

impl Resource for PropertyUnit {
    const NAME: &'static str = "Unit";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        require("propertyId", &self.property_id)
    }
}
