use serde::Deserialize;

/// Query string accepted by `GET /{resource}`
#[derive(Debug, Default, Deserialize)]
pub struct ReadQuery {
    /// Identifier for the query-style single-record lookup
    pub id: Option<String>,
}
