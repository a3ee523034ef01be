//! Tenant entity.

use serde::{Deserialize, Serialize};

use crate::domain::resource::{require, Resource};
use crate::errors::ValidationError;

/// A person who rents a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    #[serde(default)]
    pub phone: String,
}

impl Resource for Tenant {
    const NAME: &'static str = "Tenant";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        require("firstName", &self.first_name)?;
        require("lastName", &self.last_name)?;
        require("email", &self.email)
    }
}
