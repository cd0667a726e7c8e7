//! Client for the bsocial index service: one-shot queries, REST accessor
//! routes, transaction ingestion, and SSE push-stream subscriptions.

pub mod client;
pub mod error;
pub mod response;
pub mod sse;
pub mod subscribe;

pub use client::{ClientConfig, IndexClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use response::QueryResponse;
pub use sse::{PushPayload, SseDecoder};
pub use subscribe::{SubscribeOptions, Subscription};
