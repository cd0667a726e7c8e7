//! Bare transaction container and wire serialization. Inputs are never
//! populated by this SDK: funding and UTXO selection belong to the caller.

use crate::script::Script;

/// A single transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    pub satoshis: u64,
    pub script: Script,
}

/// An unfunded transaction carrying protocol outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Transaction {
    pub fn new() -> Self {
        Self {
            version: 1,
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    pub fn add_output(&mut self, output: TxOut) -> &mut Self {
        self.outputs.push(output);
        self
    }

    /// Canonical wire bytes: LE version, varint input count (always 0 here),
    /// varint output count, outputs (LE value + varint-prefixed script),
    /// LE lock time.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.version.to_le_bytes());
        write_varint(&mut buf, 0);
        write_varint(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            buf.extend_from_slice(&output.satoshis.to_le_bytes());
            write_varint(&mut buf, output.script.len() as u64);
            buf.extend_from_slice(output.script.as_bytes());
        }
        buf.extend_from_slice(&self.lock_time.to_le_bytes());
        buf
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

fn write_varint(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::OP_RETURN;

    #[test]
    fn test_empty_transaction_wire_shape() {
        let tx = Transaction::new();
        let bytes = tx.to_bytes();
        // version(4) + in-count(1) + out-count(1) + locktime(4)
        assert_eq!(bytes.len(), 10);
        assert_eq!(&bytes[..4], &1u32.to_le_bytes());
        assert_eq!(bytes[4], 0);
        assert_eq!(bytes[5], 0);
    }

    #[test]
    fn test_output_serialization() {
        let mut script = Script::new();
        script.push_op(OP_RETURN);
        let mut tx = Transaction::new();
        tx.add_output(TxOut {
            satoshis: 546,
            script,
        });

        let bytes = tx.to_bytes();
        assert_eq!(bytes[5], 1); // one output
        assert_eq!(&bytes[6..14], &546u64.to_le_bytes());
        assert_eq!(bytes[14], 1); // script length
        assert_eq!(bytes[15], OP_RETURN);
    }

    #[test]
    fn test_varint_boundaries() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 0xfc);
        assert_eq!(buf, vec![0xfc]);

        buf.clear();
        write_varint(&mut buf, 0xfd);
        assert_eq!(buf, vec![0xfd, 0xfd, 0x00]);

        buf.clear();
        write_varint(&mut buf, 0x1_0000);
        assert_eq!(buf, vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
    }
}
