//! Activity log entity.

use serde::{Deserialize, Serialize};

use crate::domain::resource::{require, Resource};
use crate::errors::ValidationError;

/// Audit trail entry recording who did what to which record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub user_id: i64,

    #[serde(default)]
    pub entity_type: String,

    #[serde(default)]
    pub entity_id: i64,

    #[serde(default)]
    pub action: String,

    pub timestamp: i64,
}

impl Resource for ActivityLog {
    const NAME: &'static str = "Activity log";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        require("timestamp", &self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_required() {
        let missing: Result<ActivityLog, _> = serde_json::from_str(r#"{"action":"create"}"#);
        assert!(missing.is_err());

        let zero: ActivityLog = serde_json::from_str(r#"{"timestamp":0}"#).unwrap();
        assert_eq!(zero.validate_new(), Err(ValidationError::empty("timestamp")));
    }
}
