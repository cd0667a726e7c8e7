//! Response-shape normalization. The index returns either a flat record
//! array or a `{c, u}` object with separate confirmed/unconfirmed arrays;
//! both collapse to one sequence at this boundary.

use serde::Deserialize;

use bsocial_core::ProtocolRecord;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Flat(Vec<ProtocolRecord>),
    Split {
        #[serde(default)]
        c: Option<Vec<ProtocolRecord>>,
        #[serde(default)]
        u: Option<Vec<ProtocolRecord>>,
    },
}

impl QueryResponse {
    /// Flat arrays pass through; split responses concatenate confirmed
    /// records first, unconfirmed last; an empty object yields nothing.
    pub fn into_records(self) -> Vec<ProtocolRecord> {
        match self {
            QueryResponse::Flat(records) => records,
            QueryResponse::Split { c, u } => {
                let mut records = c.unwrap_or_default();
                records.extend(u.unwrap_or_default());
                records
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(h: &str) -> String {
        format!(r#"{{"tx":{{"h":"{h}"}}}}"#)
    }

    #[test]
    fn test_flat_array_passes_through() {
        let json = format!("[{},{}]", record_json("a"), record_json("b"));
        let response: QueryResponse = serde_json::from_str(&json).unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tx.h, "a");
        assert_eq!(records[1].tx.h, "b");
    }

    #[test]
    fn test_split_concatenates_confirmed_then_unconfirmed() {
        let json = format!(
            r#"{{"c":[{}],"u":[{}]}}"#,
            record_json("conf"),
            record_json("unconf")
        );
        let response: QueryResponse = serde_json::from_str(&json).unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tx.h, "conf");
        assert_eq!(records[1].tx.h, "unconf");
    }

    #[test]
    fn test_empty_object_yields_empty() {
        let response: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_single_sided_split() {
        let json = format!(r#"{{"u":[{}]}}"#, record_json("x"));
        let response: QueryResponse = serde_json::from_str(&json).unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tx.h, "x");
    }
}
