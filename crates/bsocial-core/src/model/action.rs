use crate::constants::APP_ID;
use crate::error::CoreError;

/// Where an action points: a channel, a URL provider, a transaction, or an
/// identity. Rendered into the metadata layer as `context`/`contextValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Topic,
    Url,
    Tx,
    Channel,
    BapId,
}

impl Context {
    /// The canonical `context` value written into the metadata layer.
    pub fn as_metadata_value(&self) -> &'static str {
        match self {
            Context::Topic | Context::Channel => "channel",
            Context::Url => "provider",
            Context::Tx => "tx",
            Context::BapId => "bapID",
        }
    }
}

/// Recipient of a message: a public channel or a direct identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageDestination {
    Channel(String),
    BapId(String),
}

/// A typed social action, validated at construction and immutable after.
/// Each builder call derives fresh token sequences from the value — nothing
/// here is shared between actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Post {
        content: String,
        context: Option<(Context, String)>,
        tags: Vec<String>,
    },
    Reply {
        content: String,
        reply_to: String,
        tags: Vec<String>,
    },
    Message {
        content: String,
        destination: Option<MessageDestination>,
    },
    Like {
        txid: String,
    },
    Unlike {
        txid: String,
    },
    Follow {
        bap_id: String,
    },
    Unfollow {
        bap_id: String,
    },
    Video {
        provider: String,
        video_id: String,
        duration: Option<u32>,
        start: Option<u32>,
    },
    Repost {
        txid: String,
        context: Option<(Context, String)>,
    },
    Friend {
        bap_id: String,
        public_key: Option<String>,
    },
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl Action {
    pub fn post(
        content: impl Into<String>,
        context: Option<(Context, String)>,
        tags: Vec<String>,
    ) -> Result<Self, CoreError> {
        let content = content.into();
        require("post content", &content)?;
        Ok(Action::Post {
            content,
            context,
            tags,
        })
    }

    pub fn reply(
        content: impl Into<String>,
        reply_to: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self, CoreError> {
        let content = content.into();
        let reply_to = reply_to.into();
        require("reply content", &content)?;
        require("reply target txid", &reply_to)?;
        Ok(Action::Reply {
            content,
            reply_to,
            tags,
        })
    }

    pub fn message(
        content: impl Into<String>,
        destination: Option<MessageDestination>,
    ) -> Result<Self, CoreError> {
        let content = content.into();
        require("message content", &content)?;
        if let Some(MessageDestination::Channel(c)) = &destination {
            require("message channel", c)?;
        }
        if let Some(MessageDestination::BapId(id)) = &destination {
            require("message recipient", id)?;
        }
        Ok(Action::Message {
            content,
            destination,
        })
    }

    pub fn like(txid: impl Into<String>) -> Result<Self, CoreError> {
        let txid = txid.into();
        require("like txid", &txid)?;
        Ok(Action::Like { txid })
    }

    pub fn unlike(txid: impl Into<String>) -> Result<Self, CoreError> {
        let txid = txid.into();
        require("unlike txid", &txid)?;
        Ok(Action::Unlike { txid })
    }

    pub fn follow(bap_id: impl Into<String>) -> Result<Self, CoreError> {
        let bap_id = bap_id.into();
        require("follow bapID", &bap_id)?;
        Ok(Action::Follow { bap_id })
    }

    pub fn unfollow(bap_id: impl Into<String>) -> Result<Self, CoreError> {
        let bap_id = bap_id.into();
        require("unfollow bapID", &bap_id)?;
        Ok(Action::Unfollow { bap_id })
    }

    pub fn video(
        provider: impl Into<String>,
        video_id: impl Into<String>,
        duration: Option<u32>,
        start: Option<u32>,
    ) -> Result<Self, CoreError> {
        let provider = provider.into();
        let video_id = video_id.into();
        require("video provider", &provider)?;
        require("videoID", &video_id)?;
        Ok(Action::Video {
            provider,
            video_id,
            duration,
            start,
        })
    }

    pub fn repost(
        txid: impl Into<String>,
        context: Option<(Context, String)>,
    ) -> Result<Self, CoreError> {
        let txid = txid.into();
        require("repost txid", &txid)?;
        Ok(Action::Repost { txid, context })
    }

    pub fn friend(
        bap_id: impl Into<String>,
        public_key: Option<String>,
    ) -> Result<Self, CoreError> {
        let bap_id = bap_id.into();
        require("friend bapID", &bap_id)?;
        Ok(Action::Friend { bap_id, public_key })
    }

    pub fn app(&self) -> &'static str {
        APP_ID
    }

    /// The `type` value written into the metadata layer.
    pub fn action_type(&self) -> &'static str {
        match self {
            Action::Post { .. } | Action::Reply { .. } => "post",
            Action::Message { .. } => "message",
            Action::Like { .. } => "like",
            Action::Unlike { .. } => "unlike",
            Action::Follow { .. } => "follow",
            Action::Unfollow { .. } => "unfollow",
            Action::Video { .. } => "video",
            Action::Repost { .. } => "repost",
            Action::Friend { .. } => "friend",
        }
    }

    /// Free-text content, for kinds that carry a content layer.
    pub fn content(&self) -> Option<&str> {
        match self {
            Action::Post { content, .. }
            | Action::Reply { content, .. }
            | Action::Message { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Action::Post { tags, .. } | Action::Reply { tags, .. } => tags,
            _ => &[],
        }
    }

    /// Canonical metadata key/value pairs for this action, in layer order.
    /// `app` and `type` always lead; the rest follows the per-kind mapping.
    pub fn metadata_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("app", self.app().to_string()),
            ("type", self.action_type().to_string()),
        ];
        match self {
            Action::Post { context, .. } => {
                push_context(&mut pairs, context);
            }
            Action::Reply { reply_to, .. } => {
                pairs.push(("context", "tx".to_string()));
                pairs.push(("tx", reply_to.clone()));
            }
            Action::Message { destination, .. } => match destination {
                Some(MessageDestination::Channel(channel)) => {
                    pairs.push(("channel", channel.clone()));
                }
                Some(MessageDestination::BapId(bap_id)) => {
                    pairs.push(("context", "bapID".to_string()));
                    pairs.push(("bapID", bap_id.clone()));
                }
                None => {}
            },
            Action::Like { txid } | Action::Unlike { txid } => {
                pairs.push(("tx", txid.clone()));
            }
            Action::Follow { bap_id } | Action::Unfollow { bap_id } => {
                pairs.push(("bapID", bap_id.clone()));
            }
            Action::Video {
                provider,
                video_id,
                duration,
                start,
            } => {
                pairs.push(("provider", provider.clone()));
                pairs.push(("videoID", video_id.clone()));
                if let Some(duration) = duration {
                    pairs.push(("duration", duration.to_string()));
                }
                if let Some(start) = start {
                    pairs.push(("start", start.to_string()));
                }
            }
            Action::Repost { txid, context } => {
                pairs.push(("tx", txid.clone()));
                push_context(&mut pairs, context);
            }
            Action::Friend { bap_id, public_key } => {
                pairs.push(("bapID", bap_id.clone()));
                if let Some(public_key) = public_key {
                    pairs.push(("publicKey", public_key.clone()));
                }
            }
        }
        pairs
    }
}

fn push_context(pairs: &mut Vec<(&'static str, String)>, context: &Option<(Context, String)>) {
    if let Some((context, value)) = context {
        pairs.push(("context", context.as_metadata_value().to_string()));
        pairs.push(("contextValue", value.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_requires_content() {
        assert!(Action::post("", None, vec![]).is_err());
        assert!(Action::post("   ", None, vec![]).is_err());
        assert!(Action::post("hello", None, vec![]).is_ok());
    }

    #[test]
    fn test_message_requires_content_and_nonempty_channel() {
        assert!(Action::message("", None).is_err());
        assert!(
            Action::message("hi", Some(MessageDestination::Channel("".into()))).is_err()
        );
        assert!(
            Action::message("hi", Some(MessageDestination::Channel("general".into()))).is_ok()
        );
    }

    #[test]
    fn test_post_metadata_pins_app_and_type() {
        let action = Action::post("hello", None, vec![]).unwrap();
        assert_eq!(
            action.metadata_pairs(),
            vec![
                ("app", "bsocial".to_string()),
                ("type", "post".to_string()),
            ]
        );
    }

    #[test]
    fn test_post_context_pairs() {
        let action =
            Action::post("hello", Some((Context::Channel, "general".into())), vec![]).unwrap();
        let pairs = action.metadata_pairs();
        assert_eq!(pairs[2], ("context", "channel".to_string()));
        assert_eq!(pairs[3], ("contextValue", "general".to_string()));
    }

    #[test]
    fn test_reply_pins_tx_context_and_target() {
        let action = Action::reply("agreed", "deadbeef", vec![]).unwrap();
        let pairs = action.metadata_pairs();
        assert_eq!(pairs[2], ("context", "tx".to_string()));
        assert_eq!(pairs[3], ("tx", "deadbeef".to_string()));
        assert_eq!(action.action_type(), "post");
    }

    #[test]
    fn test_video_optional_fields_in_order() {
        let action = Action::video("youtube", "dQw4w9WgXcQ", Some(212), Some(30)).unwrap();
        let pairs = action.metadata_pairs();
        assert_eq!(pairs[2], ("provider", "youtube".to_string()));
        assert_eq!(pairs[3], ("videoID", "dQw4w9WgXcQ".to_string()));
        assert_eq!(pairs[4], ("duration", "212".to_string()));
        assert_eq!(pairs[5], ("start", "30".to_string()));
    }

    #[test]
    fn test_url_context_maps_to_provider() {
        assert_eq!(Context::Url.as_metadata_value(), "provider");
        assert_eq!(Context::Topic.as_metadata_value(), "channel");
    }

    #[test]
    fn test_friend_public_key_is_optional() {
        let bare = Action::friend("someId", None).unwrap();
        assert_eq!(bare.metadata_pairs().len(), 3);
        let keyed = Action::friend("someId", Some("02abc".into())).unwrap();
        assert_eq!(
            keyed.metadata_pairs()[3],
            ("publicKey", "02abc".to_string())
        );
    }
}
