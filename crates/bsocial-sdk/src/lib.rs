//! Rust SDK for recording social actions on-chain and reading them back
//! from a bsocial index.
//!
//! # Example
//! ```no_run
//! use bsocial_sdk::{create_post, PostOptions};
//!
//! let tx = create_post("hello world", PostOptions::default()).unwrap();
//! println!("raw tx: {}", tx.to_hex());
//! ```

mod create;

pub use create::{
    create_follow, create_friend, create_like, create_message, create_post, create_reply,
    create_repost, create_unfollow, create_unlike, create_video, FriendOptions, MessageOptions,
    PostOptions, ReplyOptions, RepostOptions, VideoOptions,
};

// Re-export the pieces SDK users compose with the create functions.
pub use bsocial_client::{
    ClientConfig, ClientError, IndexClient, SubscribeOptions, Subscription, DEFAULT_BASE_URL,
};
pub use bsocial_core::model::{Action, Context, MessageDestination, ProtocolRecord};
pub use bsocial_core::{CoreError, Script, Transaction, TxOut};
pub use bsocial_protocol::{
    sign_output, sign_output_named, AttestationKey, ProtocolError, SignatureProtocol,
};
pub use bsocial_query::{
    decode_query, encode_query, follows_query, friends_query, likes_query, messages_query,
    posts_query, Collection, FollowsQueryOptions, FriendsQueryOptions, LikesQueryOptions,
    MessagesQueryOptions, PostsQueryOptions, Query, QueryError,
};
