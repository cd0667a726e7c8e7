//! Protocol markers and wire-level constants shared across the SDK.

/// Application identifier pinned into every metadata layer.
pub const APP_ID: &str = "bsocial";

/// B protocol marker: opens the free-text content layer.
pub const B_PREFIX: &str = "19HxigV4QyBv3tHpQVcUEQyq1pzZVdoAut";

/// MAP protocol marker: opens the key/value metadata layer.
pub const MAP_PREFIX: &str = "1PuQa7K62MiKCtssSLKy1kh56WWU7MtUR5";

/// Attestation protocol marker, appended by the signing step.
pub const SIGMA_PREFIX: &str = "SIGMA";

/// Separator push between protocol layers in one OP_RETURN output.
pub const LAYER_SEPARATOR: &str = "|";

/// MAP command for the metadata layer.
pub const MAP_CMD_SET: &str = "SET";

/// MAP command for the tag layer.
pub const MAP_CMD_ADD: &str = "ADD";

pub const DEFAULT_CONTENT_TYPE: &str = "text/markdown";
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Pre-agreed time-lock script template. The assembler splices the
/// hex-encoded address and block height between prefix and suffix.
pub const LOCKUP_PREFIX: &str = "OP_IF OP_DUP OP_HASH160";
pub const LOCKUP_SUFFIX: &str =
    "OP_EQUALVERIFY OP_CHECKSIG OP_ELSE OP_CHECKLOCKTIMEVERIFY OP_DROP OP_ENDIF";
