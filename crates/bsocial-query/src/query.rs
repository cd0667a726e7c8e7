use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Query schema version understood by the index service.
pub const QUERY_VERSION: u32 = 3;

/// Record collections the index exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Post,
    Message,
    Like,
    Follow,
    Friend,
    Video,
    Repost,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Post => "post",
            Collection::Message => "message",
            Collection::Like => "like",
            Collection::Follow => "follow",
            Collection::Friend => "friend",
            Collection::Video => "video",
            Collection::Repost => "repost",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A versioned filter descriptor for one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub v: u32,
    pub q: QueryBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBody {
    pub find: Document,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
}

impl Query {
    pub fn new(find: Document, sort: Option<Document>, limit: Option<u64>) -> Self {
        Self {
            v: QUERY_VERSION,
            q: QueryBody {
                find,
                sort,
                limit,
                skip: None,
            },
        }
    }
}
