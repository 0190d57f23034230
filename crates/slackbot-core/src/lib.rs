//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod bot_commands;
mod context;
pub mod errors;
pub mod use_cases;

use bot_commands::executor::CommandExecutor;
pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::events::handle_event_callback::HandleEventCallback;

module! {
    pub CoreModule {
        components = [CommandExecutor, HandleEventCallback],
        providers = []
    }
}
