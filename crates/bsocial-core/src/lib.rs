//! Core data model and script/transaction primitives for the bsocial SDK.
//!
//! Holds the typed action model, the decoded record model returned by the
//! index service, and the minimal script/transaction layer the protocol
//! encoder writes into.

pub mod constants;
pub mod error;
pub mod model;
pub mod script;
pub mod transaction;

pub use error::CoreError;
pub use model::{Action, Attestation, Context, MessageDestination, ProtocolRecord};
pub use script::Script;
pub use transaction::{Transaction, TxOut};
