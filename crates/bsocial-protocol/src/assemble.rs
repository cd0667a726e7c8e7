//! Composes built scripts into an unfunded transaction: one output per
//! script in the order given, optionally followed by a value-bearing
//! time-lock output.

use bsocial_core::constants::{LOCKUP_PREFIX, LOCKUP_SUFFIX};
use bsocial_core::{Script, Transaction, TxOut};

use crate::error::ProtocolError;

/// Options for the appended time-lock output.
#[derive(Debug, Clone)]
pub struct LockOptions {
    /// Destination address, spliced into the template as hex push-data.
    pub address: String,
    /// Unlock block height, spliced in the same way.
    pub height: String,
    /// Value carried by the lock output.
    pub satoshis: u64,
}

/// One zero-value output per script, in order. No inputs are populated.
pub fn assemble(scripts: Vec<Script>) -> Transaction {
    let mut tx = Transaction::new();
    for script in scripts {
        tx.add_output(TxOut {
            satoshis: 0,
            script,
        });
    }
    tx
}

/// Like [`assemble`], appending a lock output when options are given.
pub fn assemble_with_lock(
    scripts: Vec<Script>,
    lock: Option<&LockOptions>,
) -> Result<Transaction, ProtocolError> {
    let mut tx = assemble(scripts);
    if let Some(lock) = lock {
        tx.add_output(TxOut {
            satoshis: lock.satoshis,
            script: lock_script(lock)?,
        });
    }
    Ok(tx)
}

/// Instantiate the pre-agreed lock template with the supplied tokens.
pub fn lock_script(lock: &LockOptions) -> Result<Script, ProtocolError> {
    let asm = format!(
        "{LOCKUP_PREFIX} {} {} {LOCKUP_SUFFIX}",
        hex::encode(&lock.address),
        hex::encode(&lock.height),
    );
    Ok(Script::from_asm(&asm)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_output_script;
    use bsocial_core::Action;

    #[test]
    fn test_assemble_orders_outputs() {
        let first = build_output_script(&Action::like("aa").unwrap());
        let second = build_output_script(&Action::like("bb").unwrap());
        let tx = assemble(vec![first.clone(), second.clone()]);
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.outputs[0].script, first);
        assert_eq!(tx.outputs[1].script, second);
        assert!(tx.outputs.iter().all(|o| o.satoshis == 0));
    }

    #[test]
    fn test_lock_output_appended_with_value() {
        let script = build_output_script(&Action::post("x", None, vec![]).unwrap());
        let lock = LockOptions {
            address: "1Abc".into(),
            height: "800000".into(),
            satoshis: 546,
        };
        let tx = assemble_with_lock(vec![script], Some(&lock)).unwrap();
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.outputs[1].satoshis, 546);

        let asm = tx.outputs[1].script.to_asm().unwrap();
        assert!(asm.starts_with(LOCKUP_PREFIX));
        assert!(asm.ends_with(LOCKUP_SUFFIX));
        assert!(asm.contains(&hex::encode("1Abc")));
        assert!(asm.contains(&hex::encode("800000")));
    }

    #[test]
    fn test_no_lock_options_means_single_output() {
        let script = build_output_script(&Action::post("hello", None, vec![]).unwrap());
        let tx = assemble_with_lock(vec![script], None).unwrap();
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].satoshis, 0);
    }
}
