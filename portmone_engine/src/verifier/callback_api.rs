use std::fmt::Debug;

use log::*;

use crate::{
    callback::{parse_amount, require_text, screen_callback, ElementPath, Rejection, ResultCode},
    events::{EventHooks, VerifiedAuthorization},
    traits::OrderStore,
    verifier::{SubscriberFaultPolicy, VerifierConfig, VerifierError},
};

/// How a callback ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Every check passed and subscribers have been notified.
    Verified(VerifiedAuthorization),
    /// The callback was well-formed and addressed to us, but refers to an order we don't have. It is acknowledged so
    /// that Portmone stops retrying.
    OrderUnknown(String),
    Rejected(Rejection),
}

impl CallbackOutcome {
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::Verified(_) | Self::OrderUnknown(_) => ResultCode::Ok,
            Self::Rejected(r) => r.result_code(),
        }
    }
}

/// `CallbackApi` verifies Portmone authorization callbacks and reconciles them against the order store.
///
/// The checks run in a fixed order and the first failure ends the call:
/// 1. The `data` field is present and is XML.
/// 2. `BILL/PAYEE/CODE` is present, not empty, and matches the configured payee.
/// 3. `BILL/BILL_NUMBER` is present and not empty.
/// 4. The order exists. An unknown order is *acknowledged*, not rejected.
/// 5. `BILL/PAYED_AMOUNT` is present, not empty, and is a decimal.
///
/// Only then are the `on_authorization_verified` subscribers notified.
pub struct CallbackApi<B> {
    db: B,
    config: VerifierConfig,
    hooks: EventHooks,
}

impl<B> Debug for CallbackApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallbackApi ({} subscribers)", self.hooks.subscriber_count())
    }
}

impl<B> CallbackApi<B> {
    pub fn new(db: B, config: VerifierConfig, hooks: EventHooks) -> Self {
        Self { db, config, hooks }
    }

    pub fn db(&self) -> &B {
        &self.db
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }
}

impl<B> CallbackApi<B>
where B: OrderStore
{
    /// Runs the full verification pipeline over the raw `data` field of a callback.
    ///
    /// Every callback outcome, including rejections, is returned as `Ok`. `Err` is reserved for order store failures
    /// and, depending on the [`SubscriberFaultPolicy`], subscriber failures.
    pub async fn process_callback(&self, data: Option<&str>) -> Result<CallbackOutcome, VerifierError> {
        let result = match screen_callback(data, &self.config.payee_id) {
            Ok(r) => r,
            Err(rejection) => return Ok(reject(rejection)),
        };
        let bill_number = result.bill_number;
        let order = self.db.fetch_order_by_bill_number(&bill_number).await?;
        if order.is_none() {
            warn!("💳️ Order with bill number {bill_number:?} does not exist. Acknowledging the callback anyway.");
            return Ok(CallbackOutcome::OrderUnknown(bill_number));
        }
        let payed_amount =
            require_text(ElementPath::PayedAmount, result.payed_amount).and_then(|text| parse_amount(&text));
        let payed_amount = match payed_amount {
            Ok(amount) => amount,
            Err(rejection) => return Ok(reject(rejection)),
        };
        let authorization = VerifiedAuthorization { bill_number, payed_amount };
        info!("💳️ Payment of {} verified for order {}", authorization.payed_amount, authorization.bill_number);
        self.notify_subscribers(&authorization).await?;
        Ok(CallbackOutcome::Verified(authorization))
    }

    async fn notify_subscribers(&self, authorization: &VerifiedAuthorization) -> Result<(), VerifierError> {
        debug!("💳️ Notifying {} subscribers of verified payment", self.hooks.subscriber_count());
        let stop_on_error = self.config.subscriber_fault_policy == SubscriberFaultPolicy::Fail;
        self.hooks.publish_authorization_verified(authorization, stop_on_error).await.map_err(|e| {
            error!("💳️ Subscriber failed for order {}. {e}", authorization.bill_number);
            VerifierError::from(e)
        })
    }
}

fn reject(rejection: Rejection) -> CallbackOutcome {
    warn!("💳️ Rejecting callback with {}. {rejection}", rejection.result_code());
    CallbackOutcome::Rejected(rejection)
}
