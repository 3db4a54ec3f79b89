use std::fmt::Display;

use thiserror::Error;

use crate::callback::ResultCode;

/// The element paths the verifier reads, relative to the root element of the callback document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementPath {
    PayeeCode,
    BillNumber,
    PayedAmount,
}

impl ElementPath {
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            Self::PayeeCode => &["BILL", "PAYEE", "CODE"],
            Self::BillNumber => &["BILL", "BILL_NUMBER"],
            Self::PayedAmount => &["BILL", "PAYED_AMOUNT"],
        }
    }
}

impl Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments().join("/"))
    }
}

/// Every way a callback can be turned away. Each variant is terminal for the current call.
///
/// The messages are for logs only. What goes back to Portmone is the fixed document of the variant's
/// [`ResultCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The request did not carry a data field")]
    MalformedRequest,
    #[error("The data field is not valid XML. {0}")]
    MalformedXml(String),
    #[error("The {0} element is not defined")]
    MissingElement(ElementPath),
    #[error("The {0} element is empty")]
    EmptyElement(ElementPath),
    #[error("The payee code {0:?} does not match the configured payee")]
    PayeeMismatch(String),
    #[error("The payed amount {0:?} is not a decimal number")]
    AmountUnparseable(String),
}

impl Rejection {
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::MalformedRequest | Self::MalformedXml(_) | Self::MissingElement(_) => ResultCode::NoValidXml,
            Self::EmptyElement(_) | Self::PayeeMismatch(_) | Self::AmountUnparseable(_) => ResultCode::ValidationError,
        }
    }
}
