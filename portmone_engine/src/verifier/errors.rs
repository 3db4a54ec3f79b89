use thiserror::Error;

use crate::{events::HookError, traits::OrderStoreError};

/// Failures that are not callback outcomes. These escape the pipeline and are for the host to deal with.
#[derive(Debug, Clone, Error)]
pub enum VerifierError {
    #[error("Could not look up the order. {0}")]
    OrderStoreError(#[from] OrderStoreError),
    #[error("A subscriber failed to handle a verified payment. {0}")]
    SubscriberFault(#[from] HookError),
}
