pub mod assemble;
pub mod builder;
pub mod error;
pub mod sign;

pub use assemble::{assemble, assemble_with_lock, lock_script, LockOptions};
pub use builder::build_output_script;
pub use error::ProtocolError;
pub use sign::{sign_output, sign_output_named, AttestationKey, SignatureProtocol};
