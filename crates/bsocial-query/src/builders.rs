//! Per-collection query builders with the collection's default sort and
//! limit. Every `find` document pins `MAP.app` and `MAP.type`.

use crate::document::Document;
use crate::query::{Collection, Query};

const DEFAULT_POSTS_LIMIT: u64 = 20;
const DEFAULT_MESSAGES_LIMIT: u64 = 50;
const DEFAULT_LIKES_LIMIT: u64 = 20;
const DEFAULT_FOLLOWS_LIMIT: u64 = 100;
const DEFAULT_FRIENDS_LIMIT: u64 = 100;

/// Default sort: newest first by indexed timestamp, then block time.
fn default_sort() -> Document {
    let mut sort = Document::new();
    sort.insert("timestamp", -1);
    sort.insert("blk.t", -1);
    sort
}

fn base_find(collection: Collection) -> Document {
    let mut find = Document::new();
    find.insert("MAP.app", "bsocial");
    find.insert("MAP.type", collection.as_str());
    find
}

#[derive(Debug, Clone, Default)]
pub struct PostsQueryOptions {
    pub address: Option<String>,
    pub bap_id: Option<String>,
    pub channel: Option<String>,
    pub limit: Option<u64>,
}

pub fn posts_query(options: &PostsQueryOptions) -> Query {
    let mut find = base_find(Collection::Post);
    if let Some(address) = &options.address {
        find.insert("AIP.address", address.as_str());
    }
    if let Some(bap_id) = &options.bap_id {
        find.insert("AIP.bapId", bap_id.as_str());
    }
    if let Some(channel) = &options.channel {
        find.insert("MAP.context", "channel");
        find.insert("MAP.contextValue", channel.as_str());
    }
    Query::new(
        find,
        Some(default_sort()),
        Some(options.limit.unwrap_or(DEFAULT_POSTS_LIMIT)),
    )
}

#[derive(Debug, Clone, Default)]
pub struct MessagesQueryOptions {
    pub channel: Option<String>,
    pub address: Option<String>,
    pub limit: Option<u64>,
}

pub fn messages_query(options: &MessagesQueryOptions) -> Query {
    let mut find = base_find(Collection::Message);
    if let Some(channel) = &options.channel {
        find.insert("MAP.channel", channel.as_str());
    }
    if let Some(address) = &options.address {
        find.insert("AIP.address", address.as_str());
    }
    Query::new(
        find,
        Some(default_sort()),
        Some(options.limit.unwrap_or(DEFAULT_MESSAGES_LIMIT)),
    )
}

#[derive(Debug, Clone, Default)]
pub struct LikesQueryOptions {
    pub address: Option<String>,
    pub txid: Option<String>,
    pub limit: Option<u64>,
}

pub fn likes_query(options: &LikesQueryOptions) -> Query {
    let mut find = base_find(Collection::Like);
    if let Some(address) = &options.address {
        find.insert("AIP.address", address.as_str());
    }
    if let Some(txid) = &options.txid {
        find.insert("MAP.tx", txid.as_str());
    }
    Query::new(
        find,
        Some(default_sort()),
        Some(options.limit.unwrap_or(DEFAULT_LIKES_LIMIT)),
    )
}

#[derive(Debug, Clone, Default)]
pub struct FollowsQueryOptions {
    pub address: Option<String>,
    pub limit: Option<u64>,
}

pub fn follows_query(options: &FollowsQueryOptions) -> Query {
    let mut find = base_find(Collection::Follow);
    if let Some(address) = &options.address {
        find.insert("AIP.address", address.as_str());
    }
    Query::new(
        find,
        Some(default_sort()),
        Some(options.limit.unwrap_or(DEFAULT_FOLLOWS_LIMIT)),
    )
}

#[derive(Debug, Clone, Default)]
pub struct FriendsQueryOptions {
    pub address: Option<String>,
    pub limit: Option<u64>,
}

pub fn friends_query(options: &FriendsQueryOptions) -> Query {
    let mut find = base_find(Collection::Friend);
    if let Some(address) = &options.address {
        find.insert("AIP.address", address.as_str());
    }
    Query::new(
        find,
        Some(default_sort()),
        Some(options.limit.unwrap_or(DEFAULT_FRIENDS_LIMIT)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_query_channel_and_limit() {
        let query = posts_query(&PostsQueryOptions {
            channel: Some("general".into()),
            limit: Some(5),
            ..Default::default()
        });

        let find = &query.q.find;
        assert_eq!(find.get("MAP.app"), Some(&serde_json::json!("bsocial")));
        assert_eq!(find.get("MAP.type"), Some(&serde_json::json!("post")));
        assert_eq!(find.get("MAP.context"), Some(&serde_json::json!("channel")));
        assert_eq!(
            find.get("MAP.contextValue"),
            Some(&serde_json::json!("general"))
        );
        assert_eq!(query.q.limit, Some(5));

        let sort = query.q.sort.as_ref().unwrap();
        assert_eq!(sort.keys().collect::<Vec<_>>(), vec!["timestamp", "blk.t"]);
        assert_eq!(sort.get("timestamp"), Some(&serde_json::json!(-1)));
        assert_eq!(sort.get("blk.t"), Some(&serde_json::json!(-1)));
    }

    #[test]
    fn test_default_limits_per_collection() {
        assert_eq!(posts_query(&Default::default()).q.limit, Some(20));
        assert_eq!(messages_query(&Default::default()).q.limit, Some(50));
        assert_eq!(likes_query(&Default::default()).q.limit, Some(20));
        assert_eq!(follows_query(&Default::default()).q.limit, Some(100));
        assert_eq!(friends_query(&Default::default()).q.limit, Some(100));
    }

    #[test]
    fn test_messages_query_uses_bare_channel_key() {
        let query = messages_query(&MessagesQueryOptions {
            channel: Some("dev".into()),
            ..Default::default()
        });
        assert_eq!(query.q.find.get("MAP.channel"), Some(&serde_json::json!("dev")));
        assert_eq!(query.q.find.get("MAP.context"), None);
    }

    #[test]
    fn test_likes_query_by_target_tx() {
        let query = likes_query(&LikesQueryOptions {
            txid: Some("cafe".into()),
            ..Default::default()
        });
        assert_eq!(query.q.find.get("MAP.tx"), Some(&serde_json::json!("cafe")));
    }

    #[test]
    fn test_absent_options_add_no_keys() {
        let query = follows_query(&Default::default());
        assert_eq!(query.q.find.len(), 2);
    }
}
