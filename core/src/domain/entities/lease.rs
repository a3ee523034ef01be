//! Lease entity binding a tenant to a unit.

use serde::{Deserialize, Serialize};

use crate::domain::resource::{require, Resource};
use crate::errors::ValidationError;

/// Rental agreement between a tenant and a unit
///
/// Dates are epoch seconds, money is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub tenant_id: i64,

    pub unit_id: i64,

    pub start: i64,

    /// Open-ended leases have no end date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,

    pub rent_amount: i64,

    #[serde(default)]
    pub security_deposit: i64,

    #[serde(default)]
    pub document_link: String,

    #[serde(default)]
    pub status: String,
}

impl Resource for Lease {
    const NAME: &'static str = "Lease";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        require("tenantId", &self.tenant_id)?;
        require("unitId", &self.unit_id)?;
        require("start", &self.start)?;
        require("rentAmount", &self.rent_amount)
    }
}
