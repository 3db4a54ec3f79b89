use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// What to tell Portmone when an event subscriber fails after the callback itself was verified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubscriberFaultPolicy {
    /// Log the failure, keep notifying the remaining subscribers and acknowledge the callback with `OK`.
    /// Portmone will not retry.
    Acknowledge,
    /// Stop at the first failing subscriber and surface the failure to the host, which answers with a server error.
    /// Portmone will retry the callback later, and subscribers that already succeeded will see the event again.
    #[default]
    Fail,
}

#[derive(Debug, Clone, Error)]
#[error("Invalid subscriber fault policy: {0}. Expected 'acknowledge' or 'fail'.")]
pub struct InvalidPolicy(String);

impl FromStr for SubscriberFaultPolicy {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acknowledge" | "ack" | "ok" => Ok(Self::Acknowledge),
            "fail" | "error" => Ok(Self::Fail),
            _ => Err(InvalidPolicy(s.to_string())),
        }
    }
}

impl Display for SubscriberFaultPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acknowledge => write!(f, "acknowledge"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Immutable settings for a [`CallbackApi`](crate::CallbackApi).
#[derive(Debug, Clone, Default)]
pub struct VerifierConfig {
    /// The merchant code Portmone must put in `BILL/PAYEE/CODE`.
    pub payee_id: String,
    pub subscriber_fault_policy: SubscriberFaultPolicy,
}

impl VerifierConfig {
    pub fn new<S: Into<String>>(payee_id: S) -> Self {
        Self { payee_id: payee_id.into(), subscriber_fault_policy: SubscriberFaultPolicy::default() }
    }

    pub fn with_subscriber_fault_policy(mut self, policy: SubscriberFaultPolicy) -> Self {
        self.subscriber_fault_policy = policy;
        self
    }
}
