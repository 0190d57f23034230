//! Crypto module.

mod errors;
mod sig;

pub use self::{
    errors::{CryptoError, Result},
    sig::{SlackSignature, SIGNATURE_VERSION},
};
