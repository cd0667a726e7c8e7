//! Query model and token encoding for the bsocial index service.

pub mod builders;
pub mod document;
pub mod error;
pub mod query;
pub mod token;

pub use builders::{
    follows_query, friends_query, likes_query, messages_query, posts_query, FollowsQueryOptions,
    FriendsQueryOptions, LikesQueryOptions, MessagesQueryOptions, PostsQueryOptions,
};
pub use document::Document;
pub use error::QueryError;
pub use query::{Collection, Query, QueryBody, QUERY_VERSION};
pub use token::{decode_query, encode_query};
