//! Maintenance request entity.

use serde::{Deserialize, Serialize};

use crate::domain::resource::{require, Resource};
use crate::errors::ValidationError;

/// Work order raised against a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub unit_id: i64,

    /// Lease active when the request was raised, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_id: Option<i64>,

    pub description: String,

    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub status: String,

    pub created: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<i64>,

    #[serde(default)]
    pub assignee: String,
}

impl Resource for MaintenanceRequest {
    const NAME: &'static str = "Maintenance request";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        require("unitId", &self.unit_id)?;
        require("description", &self.description)?;
        require("created", &self.created)
    }
}
