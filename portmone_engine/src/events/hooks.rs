//! Simple stateless pub-sub hooks
//!
//! Components of the system can subscribe to verifier events and react to them. Handlers have no access to the
//! internal state of the verifier; all they receive is the event itself.
//!
//! Handlers are async, but they are awaited in registration order before the callback is answered, so a handler that
//! blocks will hold up the response to Portmone.
use std::{future::Future, pin::Pin, sync::Arc};

use log::*;

use crate::events::{HookError, VerifiedAuthorization};

pub type HookResult = Pin<Box<dyn Future<Output = Result<(), HookError>> + Send>>;

pub type Handler<E> = Arc<dyn Fn(E) -> HookResult + Send + Sync>;

#[derive(Default, Clone)]
pub struct EventHooks {
    on_authorization_verified: Vec<Handler<VerifiedAuthorization>>,
}

impl EventHooks {
    pub fn on_authorization_verified<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(VerifiedAuthorization) -> HookResult) + Send + Sync + 'static {
        self.on_authorization_verified.push(Arc::new(f));
        self
    }

    pub fn subscriber_count(&self) -> usize {
        self.on_authorization_verified.len()
    }

    /// Calls every `on_authorization_verified` subscriber in turn.
    ///
    /// If `stop_on_error` is true, the first failure is returned and the remaining subscribers are skipped. Otherwise
    /// failures are logged, every subscriber is called, and `Ok` is returned.
    pub async fn publish_authorization_verified(
        &self,
        event: &VerifiedAuthorization,
        stop_on_error: bool,
    ) -> Result<(), HookError> {
        for (i, handler) in self.on_authorization_verified.iter().enumerate() {
            trace!("📬️ Notifying subscriber #{i} of verified payment for {}", event.bill_number);
            if let Err(e) = (handler)(event.clone()).await {
                if stop_on_error {
                    return Err(e);
                }
                error!("📬️ Subscriber #{i} failed to handle verified payment for {}. {e}", event.bill_number);
            }
        }
        Ok(())
    }
}
