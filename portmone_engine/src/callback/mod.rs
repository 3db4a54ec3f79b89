//! The pure, side-effect free stages of callback verification.
mod amount;
mod payload;
mod rejection;
mod result_codes;

pub use amount::parse_amount;
pub use payload::{check_payee, decode_envelope, require_text, screen_callback, AuthorizationResult, CallbackDocument};
pub use rejection::{ElementPath, Rejection};
pub use result_codes::ResultCode;
