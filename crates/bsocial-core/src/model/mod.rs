pub mod action;
pub mod record;

pub use action::{Action, Context, MessageDestination};
pub use record::{Attestation, BlockRef, ContentEntry, ProtocolRecord, TxRef};
