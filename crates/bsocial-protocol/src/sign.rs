//! Attestation signing: signs the bytes of a target output's script and
//! appends an attestation layer to that output. Signing never mutates the
//! input transaction; it returns a new signed transaction.

use base64::Engine;
use k256::ecdsa::{signature::Signer, Signature, SigningKey};
use sha2::{Digest, Sha256};

use bsocial_core::constants::{LAYER_SEPARATOR, SIGMA_PREFIX};
use bsocial_core::Transaction;

use crate::error::ProtocolError;

/// Algorithm tag written into the attestation layer.
const SIGNING_ALGORITHM: &str = "ECDSA";

/// Named attestation protocols. Adding a protocol means adding a variant
/// and a case in [`SignatureProtocol::parse`], not a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureProtocol {
    Sigma,
}

impl SignatureProtocol {
    /// Resolve a caller-supplied protocol name.
    pub fn parse(name: &str) -> Result<Self, ProtocolError> {
        match name {
            "sigma" => Ok(SignatureProtocol::Sigma),
            other => Err(ProtocolError::UnsupportedProtocol(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SignatureProtocol::Sigma => "sigma",
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            SignatureProtocol::Sigma => SIGMA_PREFIX,
        }
    }
}

/// A secp256k1 signing key with its derived attestation address.
pub struct AttestationKey {
    signing_key: SigningKey,
}

impl AttestationKey {
    /// Generate a random key.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Restore from raw secret bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, ProtocolError> {
        let signing_key = SigningKey::from_bytes((&bytes).into())
            .map_err(|e| ProtocolError::InvalidKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    /// Attestation address: SHA-256 of the compressed public key, hex.
    pub fn address(&self) -> String {
        let pubkey = self.signing_key.verifying_key().to_sec1_bytes();
        hex::encode(Sha256::digest(&pubkey))
    }

    fn sign_bytes(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }
}

/// Sign the output at `vout` and return a new transaction whose target
/// output script carries the appended attestation layer:
/// separator, protocol marker, algorithm, address, base64 signature, vout.
pub fn sign_output(
    protocol: SignatureProtocol,
    key: &AttestationKey,
    tx: &Transaction,
    vout: usize,
) -> Result<Transaction, ProtocolError> {
    let target = tx.outputs.get(vout).ok_or(ProtocolError::OutputIndex(vout))?;

    // The signature covers the output's script bytes as they stand before
    // the attestation layer is appended.
    let signature = key.sign_bytes(target.script.as_bytes());
    let signature_bytes: [u8; 64] = signature.to_bytes().into();
    let signature_b64 = base64::engine::general_purpose::STANDARD.encode(signature_bytes);
    let address = key.address();

    let mut signed = tx.clone();
    let script = &mut signed.outputs[vout].script;
    script.push_data(LAYER_SEPARATOR.as_bytes());
    script.push_data(protocol.marker().as_bytes());
    script.push_data(SIGNING_ALGORITHM.as_bytes());
    script.push_data(address.as_bytes());
    script.push_data(signature_b64.as_bytes());
    script.push_data(vout.to_string().as_bytes());

    tracing::debug!(protocol = protocol.name(), vout, %address, "signed output");
    Ok(signed)
}

/// Convenience entry point taking the protocol by name, as callers supply
/// it. Unknown names fail before any key or transaction work happens.
pub fn sign_output_named(
    protocol_name: &str,
    key: &AttestationKey,
    tx: &Transaction,
    vout: usize,
) -> Result<Transaction, ProtocolError> {
    let protocol = SignatureProtocol::parse(protocol_name)?;
    sign_output(protocol, key, tx, vout)
}
