//! Incremental server-sent-events framing. Feed raw transport chunks in,
//! get complete `data:` payloads out; partial frames stay buffered until
//! the terminating blank line arrives.

use serde::Deserialize;

use bsocial_core::ProtocolRecord;

/// One pushed message: a single record or a batch, normalized to a
/// uniform record sequence downstream.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PushPayload {
    One(ProtocolRecord),
    Many(Vec<ProtocolRecord>),
}

impl PushPayload {
    pub fn into_records(self) -> Vec<ProtocolRecord> {
        match self {
            PushPayload::One(record) => vec![record],
            PushPayload::Many(records) => records,
        }
    }
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transport chunk and drain every complete frame's data
    /// payload. Comment lines and empty frames (keep-alives) are skipped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some((end, sep_len)) = find_frame_end(&self.buffer) {
            let frame: Vec<u8> = self.buffer.drain(..end + sep_len).collect();
            if let Some(data) = parse_frame(&frame) {
                payloads.push(data);
            }
        }
        payloads
    }
}

/// Locate the earliest frame terminator, LF-LF or CRLF-CRLF.
fn find_frame_end(buffer: &[u8]) -> Option<(usize, usize)> {
    let lf = buffer.windows(2).position(|w| w == b"\n\n").map(|i| (i, 2));
    let crlf = buffer
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|i| (i, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn parse_frame(frame: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(frame);
    let mut data_lines = Vec::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if let Some(rest) = line.strip_prefix("data:") {
            data_lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    if data_lines.is_empty() {
        None
    } else {
        Some(data_lines.join("\n"))
    }
}
