//! Push-stream subscriptions. One subscription owns one live SSE
//! connection on a spawned task; callbacks for a handle run on that task
//! in transport arrival order, never concurrently. There is no automatic
//! reconnect — that policy belongs to the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bsocial_core::ProtocolRecord;
use bsocial_query::{messages_query, posts_query, Collection, MessagesQueryOptions, PostsQueryOptions, Query};

use crate::client::IndexClient;
use crate::error::ClientError;
use crate::sse::{PushPayload, SseDecoder};

type RecordCallback = Box<dyn Fn(ProtocolRecord) + Send + 'static>;
type ErrorCallback = Box<dyn Fn(ClientError) + Send + 'static>;
type OpenCallback = Box<dyn Fn() + Send + 'static>;

/// Event callbacks for one subscription.
pub struct SubscribeOptions {
    on_record: RecordCallback,
    on_error: Option<ErrorCallback>,
    on_open: Option<OpenCallback>,
}

impl SubscribeOptions {
    pub fn new(on_record: impl Fn(ProtocolRecord) + Send + 'static) -> Self {
        Self {
            on_record: Box::new(on_record),
            on_error: None,
            on_open: None,
        }
    }

    pub fn on_error(mut self, callback: impl Fn(ClientError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    pub fn on_open(mut self, callback: impl Fn() + Send + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    fn emit_error(&self, error: ClientError) {
        if let Some(callback) = &self.on_error {
            callback(error);
        }
    }
}

/// Handle to a live push connection. Close is explicit and idempotent;
/// dropping the handle also tears the connection down.
pub struct Subscription {
    task: tokio::task::JoinHandle<()>,
    closed: Arc<AtomicBool>,
}

impl Subscription {
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.task.abort();
            tracing::debug!("subscription closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst) || self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.close();
    }
}

impl IndexClient {
    /// Open `GET /s/{collection}/{token}` as a persistent SSE stream.
    /// Must be called within a tokio runtime.
    pub fn subscribe(
        &self,
        collection: Collection,
        query: &Query,
        options: SubscribeOptions,
    ) -> Result<Subscription, ClientError> {
        let url = self.stream_url(collection, query)?;
        let http = self.http().clone();
        let closed = Arc::new(AtomicBool::new(false));

        let task = tokio::spawn(run_stream(http, url, options));

        Ok(Subscription { task, closed })
    }

    /// Subscribe to new messages in a channel.
    pub fn subscribe_to_channel(
        &self,
        channel: &str,
        options: SubscribeOptions,
    ) -> Result<Subscription, ClientError> {
        let query = messages_query(&MessagesQueryOptions {
            channel: Some(channel.to_string()),
            limit: Some(1),
            ..Default::default()
        });
        self.subscribe(Collection::Message, &query, options)
    }

    /// Subscribe to new posts, optionally scoped to a channel or author
    /// address.
    pub fn subscribe_to_posts(
        &self,
        channel: Option<&str>,
        address: Option<&str>,
        options: SubscribeOptions,
    ) -> Result<Subscription, ClientError> {
        let query = posts_query(&PostsQueryOptions {
            channel: channel.map(String::from),
            address: address.map(String::from),
            limit: Some(1),
            ..Default::default()
        });
        self.subscribe(Collection::Post, &query, options)
    }
}

async fn run_stream(http: reqwest::Client, url: String, options: SubscribeOptions) {
    tracing::debug!(%url, "opening push stream");
    let mut response = match http.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            options.emit_error(ClientError::Transport(e.to_string()));
            return;
        }
    };

    let status = response.status();
    if !status.is_success() {
        options.emit_error(ClientError::Service {
            status: status.as_u16(),
        });
        return;
    }

    if let Some(on_open) = &options.on_open {
        on_open();
    }

    let mut decoder = SseDecoder::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                for payload in decoder.push(&chunk) {
                    dispatch(&options, &payload);
                }
            }
            Ok(None) => {
                tracing::debug!(%url, "push stream ended");
                break;
            }
            Err(e) => {
                options.emit_error(ClientError::Transport(e.to_string()));
                break;
            }
        }
    }
}

/// Decode one frame payload and emit one event per record, preserving
/// source order. Parse failures are reported and deliberately non-fatal so
/// the stream stays available.
fn dispatch(options: &SubscribeOptions, payload: &str) {
    match serde_json::from_str::<PushPayload>(payload) {
        Ok(message) => {
            for record in message.into_records() {
                (options.on_record)(record);
            }
        }
        Err(e) => {
            tracing::warn!("undecodable push payload: {e}");
            options.emit_error(ClientError::StreamDecode(e.to_string()));
        }
    }
}
