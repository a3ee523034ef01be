//! Payment entity and its base64 confirmation payload.

use serde::{Deserialize, Serialize};

use crate::domain::resource::{require, Resource};
use crate::errors::ValidationError;

/// Rent payment received against a lease
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub lease_id: i64,

    pub amount: i64,

    pub date: i64,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub notes: String,

    /// Receipt or confirmation document, base64 in JSON
    #[serde(default, with = "base64_bytes")]
    pub confirmation: Vec<u8>,
}

impl Resource for Payment {
    const NAME: &'static str = "Payment";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        require("leaseId", &self.lease_id)?;
        require("amount", &self.amount)?;
        require("date", &self.date)
    }
}

/// Serialize `Vec<u8>` as a standard base64 string; `null` decodes to empty
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD.decode(encoded.as_bytes()).map_err(D::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
