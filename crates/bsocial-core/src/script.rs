//! Minimal Bitcoin-style output scripts: data pushes, a handful of opcodes,
//! and ASM/hex round-trips. Only what the OP_RETURN protocol layers and the
//! time-lock template need.

use crate::error::CoreError;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_NOP: u8 = 0x61;
pub const OP_IF: u8 = 0x63;
pub const OP_ELSE: u8 = 0x67;
pub const OP_ENDIF: u8 = 0x68;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_DROP: u8 = 0x75;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKLOCKTIMEVERIFY: u8 = 0xb1;

fn opcode_from_name(name: &str) -> Option<u8> {
    Some(match name {
        "OP_0" | "OP_FALSE" => OP_0,
        "OP_NOP" => OP_NOP,
        "OP_IF" => OP_IF,
        "OP_ELSE" => OP_ELSE,
        "OP_ENDIF" => OP_ENDIF,
        "OP_RETURN" => OP_RETURN,
        "OP_DROP" => OP_DROP,
        "OP_DUP" => OP_DUP,
        "OP_EQUALVERIFY" => OP_EQUALVERIFY,
        "OP_HASH160" => OP_HASH160,
        "OP_CHECKSIG" => OP_CHECKSIG,
        "OP_CHECKLOCKTIMEVERIFY" => OP_CHECKLOCKTIMEVERIFY,
        _ => return None,
    })
}

fn opcode_name(op: u8) -> Option<&'static str> {
    Some(match op {
        OP_0 => "OP_0",
        OP_NOP => "OP_NOP",
        OP_IF => "OP_IF",
        OP_ELSE => "OP_ELSE",
        OP_ENDIF => "OP_ENDIF",
        OP_RETURN => "OP_RETURN",
        OP_DROP => "OP_DROP",
        OP_DUP => "OP_DUP",
        OP_EQUALVERIFY => "OP_EQUALVERIFY",
        OP_HASH160 => "OP_HASH160",
        OP_CHECKSIG => "OP_CHECKSIG",
        OP_CHECKLOCKTIMEVERIFY => "OP_CHECKLOCKTIMEVERIFY",
        _ => return None,
    })
}

/// An output locking script as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a bare opcode.
    pub fn push_op(&mut self, op: u8) -> &mut Self {
        self.0.push(op);
        self
    }

    /// Append a data push with the correct length prefix for its size.
    pub fn push_data(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        Ok(Self(hex::decode(s)?))
    }

    /// Parse an ASM string: `OP_*` tokens become opcodes, everything else
    /// must be hex and becomes a data push.
    pub fn from_asm(asm: &str) -> Result<Self, CoreError> {
        let mut script = Script::new();
        for token in asm.split_whitespace() {
            if token.starts_with("OP_") {
                let op = opcode_from_name(token)
                    .ok_or_else(|| CoreError::Asm(format!("unknown opcode {token}")))?;
                script.push_op(op);
            } else {
                let data = hex::decode(token)
                    .map_err(|_| CoreError::Asm(format!("token is neither opcode nor hex: {token}")))?;
                script.push_data(&data);
            }
        }
        Ok(script)
    }

    /// Render back to ASM. Fails on a truncated push or an opcode outside
    /// the supported set.
    pub fn to_asm(&self) -> Result<String, CoreError> {
        let mut parts = Vec::new();
        let mut i = 0;
        let bytes = &self.0;
        while i < bytes.len() {
            let op = bytes[i];
            i += 1;
            let push_len = match op {
                1..=0x4b => Some(op as usize),
                OP_PUSHDATA1 => {
                    let len = *bytes
                        .get(i)
                        .ok_or_else(|| CoreError::Script("truncated PUSHDATA1".into()))?;
                    i += 1;
                    Some(len as usize)
                }
                OP_PUSHDATA2 => {
                    let raw: [u8; 2] = bytes
                        .get(i..i + 2)
                        .ok_or_else(|| CoreError::Script("truncated PUSHDATA2".into()))?
                        .try_into()
                        .map_err(|_| CoreError::Script("truncated PUSHDATA2".into()))?;
                    i += 2;
                    Some(u16::from_le_bytes(raw) as usize)
                }
                OP_PUSHDATA4 => {
                    let raw: [u8; 4] = bytes
                        .get(i..i + 4)
                        .ok_or_else(|| CoreError::Script("truncated PUSHDATA4".into()))?
                        .try_into()
                        .map_err(|_| CoreError::Script("truncated PUSHDATA4".into()))?;
                    i += 4;
                    Some(u32::from_le_bytes(raw) as usize)
                }
                _ => None,
            };
            match push_len {
                Some(len) => {
                    let data = bytes
                        .get(i..i + len)
                        .ok_or_else(|| CoreError::Script("truncated push data".into()))?;
                    i += len;
                    parts.push(hex::encode(data));
                }
                None => {
                    let name = opcode_name(op)
                        .ok_or_else(|| CoreError::Script(format!("unknown opcode 0x{op:02x}")))?;
                    parts.push(name.to_string());
                }
            }
        }
        Ok(parts.join(" "))
    }
}
