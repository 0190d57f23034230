//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
pub mod middlewares;
pub mod server;
mod utils;
mod webhook;

pub use errors::{Result, ServerError};
