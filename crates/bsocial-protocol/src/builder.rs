//! Serializes an [`Action`] into a layered, protocol-tagged OP_RETURN
//! script. Layer order is fixed: content (B), separator, metadata (MAP SET),
//! then an optional tag layer (MAP ADD).
//!
//! Every call derives a fresh token sequence from the immutable action
//! value; no template state survives between calls.

use bsocial_core::constants::{
    B_PREFIX, DEFAULT_CONTENT_TYPE, DEFAULT_ENCODING, LAYER_SEPARATOR, MAP_CMD_ADD, MAP_CMD_SET,
    MAP_PREFIX,
};
use bsocial_core::script::{OP_0, OP_RETURN};
use bsocial_core::{Action, Script};

/// Build the data-only output script for one action.
pub fn build_output_script(action: &Action) -> Script {
    let mut script = Script::new();
    script.push_op(OP_0).push_op(OP_RETURN);

    if let Some(content) = action.content() {
        script.push_data(B_PREFIX.as_bytes());
        script.push_data(content.as_bytes());
        script.push_data(DEFAULT_CONTENT_TYPE.as_bytes());
        script.push_data(DEFAULT_ENCODING.as_bytes());
        script.push_data(LAYER_SEPARATOR.as_bytes());
    }

    script.push_data(MAP_PREFIX.as_bytes());
    script.push_data(MAP_CMD_SET.as_bytes());
    for (key, value) in action.metadata_pairs() {
        script.push_data(key.as_bytes());
        script.push_data(value.as_bytes());
    }

    let tags = action.tags();
    if !tags.is_empty() {
        script.push_data(LAYER_SEPARATOR.as_bytes());
        script.push_data(MAP_PREFIX.as_bytes());
        script.push_data(MAP_CMD_ADD.as_bytes());
        script.push_data(b"tags");
        for tag in tags {
            script.push_data(tag.as_bytes());
        }
    }

    tracing::debug!(
        action_type = action.action_type(),
        script_len = script.len(),
        "built output script"
    );
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsocial_core::model::{Context, MessageDestination};

    fn asm(action: &Action) -> String {
        build_output_script(action).to_asm().unwrap()
    }

    #[test]
    fn test_post_script_layout() {
        let action = Action::post("hello", None, vec![]).unwrap();
        let asm = asm(&action);
        let expected = format!(
            "OP_0 OP_RETURN {} {} {} {} {} {} {} {} {} {} {}",
            hex::encode(B_PREFIX),
            hex::encode("hello"),
            hex::encode("text/markdown"),
            hex::encode("utf-8"),
            hex::encode("|"),
            hex::encode(MAP_PREFIX),
            hex::encode("SET"),
            hex::encode("app"),
            hex::encode("bsocial"),
            hex::encode("type"),
            hex::encode("post"),
        );
        assert_eq!(asm, expected);
    }

    #[test]
    fn test_content_hex_appears_in_script() {
        let action = Action::post("hello", None, vec![]).unwrap();
        let script = build_output_script(&action);
        assert!(script.to_hex().contains(&hex::encode("hello")));
    }

    #[test]
    fn test_like_has_no_content_layer() {
        let action = Action::like("deadbeef").unwrap();
        let asm = asm(&action);
        assert!(!asm.contains(&hex::encode(B_PREFIX)));
        assert!(!asm.contains(&hex::encode("|")));
        assert!(asm.contains(&hex::encode("tx")));
        assert!(asm.contains(&hex::encode("deadbeef")));
    }

    #[test]
    fn test_message_channel_key() {
        let action = Action::message(
            "hi all",
            Some(MessageDestination::Channel("general".into())),
        )
        .unwrap();
        let asm = asm(&action);
        assert!(asm.contains(&format!(
            "{} {}",
            hex::encode("channel"),
            hex::encode("general")
        )));
    }

    #[test]
    fn test_repost_with_context() {
        let action =
            Action::repost("cafebabe", Some((Context::Url, "https://example.com".into())))
                .unwrap();
        let asm = asm(&action);
        assert!(asm.contains(&format!(
            "{} {}",
            hex::encode("context"),
            hex::encode("provider")
        )));
        assert!(asm.contains(&hex::encode("https://example.com")));
    }

    #[test]
    fn test_tag_layer_appended_after_metadata() {
        let action = Action::post("tagged", None, vec!["rust".into(), "chain".into()]).unwrap();
        let asm = asm(&action);
        let tag_layer = format!(
            "{} {} {} {} {} {}",
            hex::encode("|"),
            hex::encode(MAP_PREFIX),
            hex::encode("ADD"),
            hex::encode("tags"),
            hex::encode("rust"),
            hex::encode("chain"),
        );
        assert!(asm.ends_with(&tag_layer));
    }

    #[test]
    fn test_same_input_is_byte_identical() {
        let a = Action::post("same", Some((Context::Channel, "c".into())), vec![]).unwrap();
        let b = Action::post("same", Some((Context::Channel, "c".into())), vec![]).unwrap();
        assert_eq!(build_output_script(&a), build_output_script(&b));
    }

    #[test]
    fn test_different_content_never_identical() {
        let a = Action::post("first", None, vec![]).unwrap();
        let b = Action::post("second", None, vec![]).unwrap();
        assert_ne!(build_output_script(&a), build_output_script(&b));
    }

    #[test]
    fn test_builder_does_not_leak_state_across_calls() {
        // Building a tagged post must not affect a later untagged one.
        let tagged = Action::post("x", None, vec!["t1".into()]).unwrap();
        let _ = build_output_script(&tagged);
        let plain = Action::post("x", None, vec![]).unwrap();
        let asm = asm(&plain);
        assert!(!asm.contains(&hex::encode("ADD")));
        assert!(!asm.contains(&hex::encode("t1")));
    }
}
