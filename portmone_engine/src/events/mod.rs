mod event_types;
mod hooks;

pub use event_types::*;
pub use hooks::{EventHooks, Handler, HookResult};
