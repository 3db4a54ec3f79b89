pub mod callback_api;
mod config;
mod errors;

pub use config::{InvalidPolicy, SubscriberFaultPolicy, VerifierConfig};
pub use errors::VerifierError;
