//! Portmone Callback Engine
//!
//! Portmone notifies the merchant of every payment authorization by POSTing an XML document to a callback URL. This
//! library contains the provider-specific but framework-agnostic logic for verifying those callbacks.
//!
//! The library is divided into three main sections:
//! 1. The pure checks ([`mod@callback`]): reading the XML payload, matching the payee, parsing the amount, and the
//!    fixed result documents that Portmone expects in reply.
//! 2. The order store ([`OrderStore`]). A SQLite backend is provided; anything that can look an order up by its bill
//!    number can stand in for it.
//! 3. The verifier ([`CallbackApi`]), which runs the checks in order against an order store and notifies subscribers
//!    of verified payments through [`events::EventHooks`].
pub mod callback;
mod db;
pub mod db_types;
pub mod events;
mod verifier;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use db::sqlite::SqliteDatabase;
pub use db::traits;
pub use db::traits::{OrderStore, OrderStoreError};
pub use verifier::{
    callback_api::{CallbackApi, CallbackOutcome},
    InvalidPolicy,
    SubscriberFaultPolicy,
    VerifierConfig,
    VerifierError,
};
