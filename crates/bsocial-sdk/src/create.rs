//! One constructor per action kind: validate, build the layered output
//! script, and assemble an unfunded transaction ready for funding and
//! broadcast (or direct ingestion).

use bsocial_core::model::{Context, MessageDestination};
use bsocial_core::{Action, Transaction};
use bsocial_protocol::{assemble_with_lock, build_output_script, LockOptions, ProtocolError};

#[derive(Debug, Clone, Default)]
pub struct PostOptions {
    pub context: Option<Context>,
    pub context_value: Option<String>,
    pub tags: Vec<String>,
    pub lock: bool,
    pub lock_address: Option<String>,
    pub lock_height: Option<String>,
    pub lock_sats: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct ReplyOptions {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub channel: Option<String>,
    pub to_bap_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VideoOptions {
    pub duration: Option<u32>,
    pub start: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct RepostOptions {
    pub context: Option<Context>,
    pub context_value: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FriendOptions {
    pub public_key: Option<String>,
}

fn paired_context(
    context: Option<Context>,
    value: Option<String>,
) -> Option<(Context, String)> {
    match (context, value) {
        (Some(context), Some(value)) => Some((context, value)),
        _ => None,
    }
}

fn build_tx(action: &Action) -> Transaction {
    let script = build_output_script(action);
    bsocial_protocol::assemble(vec![script])
}

/// Create a post transaction. Lock fields, when all present, append a
/// value-bearing time-lock output after the data output.
pub fn create_post(content: &str, options: PostOptions) -> Result<Transaction, ProtocolError> {
    let action = Action::post(
        content,
        paired_context(options.context, options.context_value),
        options.tags,
    )?;
    let script = build_output_script(&action);

    let lock = match (options.lock, options.lock_address, options.lock_height) {
        (true, Some(address), Some(height)) => Some(LockOptions {
            address,
            height,
            satoshis: options.lock_sats.unwrap_or(0),
        }),
        _ => None,
    };
    assemble_with_lock(vec![script], lock.as_ref())
}

/// Create a reply to an existing post transaction.
pub fn create_reply(
    content: &str,
    reply_to_txid: &str,
    options: ReplyOptions,
) -> Result<Transaction, ProtocolError> {
    let action = Action::reply(content, reply_to_txid, options.tags)?;
    Ok(build_tx(&action))
}

/// Create a message transaction. A channel takes precedence over a direct
/// recipient when both are set.
pub fn create_message(
    content: &str,
    options: MessageOptions,
) -> Result<Transaction, ProtocolError> {
    let destination = if let Some(channel) = options.channel {
        Some(MessageDestination::Channel(channel))
    } else {
        options.to_bap_id.map(MessageDestination::BapId)
    };
    let action = Action::message(content, destination)?;
    Ok(build_tx(&action))
}

pub fn create_like(txid: &str) -> Result<Transaction, ProtocolError> {
    Ok(build_tx(&Action::like(txid)?))
}

pub fn create_unlike(txid: &str) -> Result<Transaction, ProtocolError> {
    Ok(build_tx(&Action::unlike(txid)?))
}

pub fn create_follow(bap_id: &str) -> Result<Transaction, ProtocolError> {
    Ok(build_tx(&Action::follow(bap_id)?))
}

pub fn create_unfollow(bap_id: &str) -> Result<Transaction, ProtocolError> {
    Ok(build_tx(&Action::unfollow(bap_id)?))
}

pub fn create_video(
    provider: &str,
    video_id: &str,
    options: VideoOptions,
) -> Result<Transaction, ProtocolError> {
    let action = Action::video(provider, video_id, options.duration, options.start)?;
    Ok(build_tx(&action))
}

pub fn create_repost(txid: &str, options: RepostOptions) -> Result<Transaction, ProtocolError> {
    let action = Action::repost(
        txid,
        paired_context(options.context, options.context_value),
    )?;
    Ok(build_tx(&action))
}

pub fn create_friend(bap_id: &str, options: FriendOptions) -> Result<Transaction, ProtocolError> {
    let action = Action::friend(bap_id, options.public_key)?;
    Ok(build_tx(&action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsocial_core::script::{OP_0, OP_RETURN};

    #[test]
    fn test_create_post_single_zero_value_output() {
        let tx = create_post("hello", PostOptions::default()).unwrap();
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].satoshis, 0);

        let script = tx.outputs[0].script.as_bytes();
        assert_eq!(&script[..2], &[OP_0, OP_RETURN]);
        assert!(tx.outputs[0].script.to_hex().contains(&hex::encode("hello")));
    }

    #[test]
    fn test_create_post_with_lock_output() {
        let tx = create_post(
            "x",
            PostOptions {
                lock: true,
                lock_address: Some("1Abc".into()),
                lock_height: Some("800000".into()),
                lock_sats: Some(546),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.outputs[1].satoshis, 546);
        let lock_asm = tx.outputs[1].script.to_asm().unwrap();
        assert!(lock_asm.contains(&hex::encode("1Abc")));
        assert!(lock_asm.contains(&hex::encode("800000")));
    }

    #[test]
    fn test_lock_requires_address_and_height() {
        let tx = create_post(
            "x",
            PostOptions {
                lock: true,
                lock_sats: Some(546),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(tx.outputs.len(), 1);
    }

    #[test]
    fn test_create_post_with_url_context() {
        let tx = create_post(
            "Check this out",
            PostOptions {
                context: Some(Context::Url),
                context_value: Some("https://example.com".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let asm = tx.outputs[0].script.to_asm().unwrap();
        assert!(asm.contains(&hex::encode("provider")));
        assert!(asm.contains(&hex::encode("https://example.com")));
    }

    #[test]
    fn test_create_message_channel_precedence() {
        let tx = create_message(
            "Hello World",
            MessageOptions {
                channel: Some("general".into()),
                to_bap_id: Some("someBapId".into()),
            },
        )
        .unwrap();
        let asm = tx.outputs[0].script.to_asm().unwrap();
        assert!(asm.contains(&hex::encode("channel")));
        assert!(!asm.contains(&hex::encode("someBapId")));
    }

    #[test]
    fn test_create_video_with_timing() {
        let tx = create_video(
            "youtube",
            "dQw4w9WgXcQ",
            VideoOptions {
                duration: Some(212),
                start: Some(30),
            },
        )
        .unwrap();
        assert_eq!(tx.outputs.len(), 1);
        let asm = tx.outputs[0].script.to_asm().unwrap();
        assert!(asm.contains(&hex::encode("212")));
        assert!(asm.contains(&hex::encode("30")));
    }

    #[test]
    fn test_create_functions_share_no_state() {
        let tx1 = create_message("First message", MessageOptions::default()).unwrap();
        let tx2 = create_message("Second message", MessageOptions::default()).unwrap();
        assert_ne!(
            tx1.outputs[0].script.to_hex(),
            tx2.outputs[0].script.to_hex()
        );
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(create_post("", PostOptions::default()).is_err());
        assert!(create_message("", MessageOptions::default()).is_err());
        assert!(create_like("").is_err());
    }
}
