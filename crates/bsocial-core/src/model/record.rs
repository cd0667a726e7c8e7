use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A decoded record as returned by the index service. Read-only on the
/// client side: the service produced it by parsing bytes the script builder
/// wrote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolRecord {
    pub tx: TxRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blk: Option<BlockRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Metadata-layer attributes; one entry per MAP layer in the output.
    #[serde(rename = "MAP", default, skip_serializing_if = "Vec::is_empty")]
    pub map: Vec<BTreeMap<String, serde_json::Value>>,
    /// Content-layer entries (content, content-type, encoding).
    #[serde(rename = "B", default, skip_serializing_if = "Vec::is_empty")]
    pub b: Vec<ContentEntry>,
    #[serde(rename = "AIP", default, skip_serializing_if = "Vec::is_empty")]
    pub aip: Vec<Attestation>,
    #[serde(rename = "SIGMA", default, skip_serializing_if = "Vec::is_empty")]
    pub sigma: Vec<Attestation>,
}

/// Transaction reference: `h` is the transaction hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TxRef {
    pub h: String,
}

/// Block placement: `i` is the block index, `t` the block timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEntry {
    pub content: String,
    #[serde(rename = "content-type")]
    pub content_type: String,
    pub encoding: String,
}

/// One attestation-layer entry: signer address plus signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attestation {
    pub address: String,
    pub signature: String,
}
