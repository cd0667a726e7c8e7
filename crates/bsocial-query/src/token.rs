//! Transport-safe query tokens: standard base64 over the query's JSON
//! serialization, suitable for a URL path segment. Deterministic — equal
//! queries always encode to equal tokens — and exactly reversible.

use base64::Engine;

use crate::error::QueryError;
use crate::query::Query;

pub fn encode_query(query: &Query) -> Result<String, QueryError> {
    let json = serde_json::to_vec(query)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(json))
}

pub fn decode_query(token: &str) -> Result<Query, QueryError> {
    let json = base64::engine::general_purpose::STANDARD.decode(token)?;
    Ok(serde_json::from_slice(&json)?)
}
