//! Reading the authorization result out of a Portmone callback.
//!
//! Portmone posts a form with a single `data` field holding an XML document:
//!
//! ```xml
//! <BILLS>
//!   <BILL>
//!     <PAYEE><CODE>1234</CODE></PAYEE>
//!     <BILL_NUMBER>ORD-1</BILL_NUMBER>
//!     <PAYED_AMOUNT>99.90</PAYED_AMOUNT>
//!   </BILL>
//! </BILLS>
//! ```
//!
//! Element paths are resolved from the root element downwards, and the first matching element wins.
use roxmltree::{Document, Node};

use crate::callback::{ElementPath, Rejection};

/// Pulls the XML text out of the form envelope. Whitespace around the document is ignored.
pub fn decode_envelope(data: Option<&str>) -> Result<&str, Rejection> {
    match data.map(str::trim) {
        Some(xml) if !xml.is_empty() => Ok(xml),
        _ => Err(Rejection::MalformedRequest),
    }
}

/// A parsed callback document.
pub struct CallbackDocument<'a> {
    doc: Document<'a>,
}

impl<'a> CallbackDocument<'a> {
    pub fn parse(xml: &'a str) -> Result<Self, Rejection> {
        let doc = Document::parse(xml).map_err(|e| Rejection::MalformedXml(e.to_string()))?;
        Ok(Self { doc })
    }

    fn find(&self, path: ElementPath) -> Option<Node<'_, 'a>> {
        path.segments().iter().try_fold(self.doc.root_element(), |node, name| {
            node.children().find(|child| child.is_element() && child.has_tag_name(*name))
        })
    }

    /// Returns the trimmed text of the element at `path`, or `None` if there is no such element. An element with no
    /// text yields an empty string.
    pub fn find_text(&self, path: ElementPath) -> Option<String> {
        self.find(path).map(|node| node.text().unwrap_or_default().trim().to_string())
    }

    /// Like [`Self::find_text`], but the element must exist and carry some text.
    pub fn require_text(&self, path: ElementPath) -> Result<String, Rejection> {
        require_text(path, self.find_text(path))
    }
}

/// A missing element is a [`Rejection::MissingElement`]; a present one whose trimmed text is empty is a
/// [`Rejection::EmptyElement`].
pub fn require_text(path: ElementPath, text: Option<String>) -> Result<String, Rejection> {
    match text {
        None => Err(Rejection::MissingElement(path)),
        Some(text) if text.is_empty() => Err(Rejection::EmptyElement(path)),
        Some(text) => Ok(text),
    }
}

/// The fields of a callback that passed the payee check.
///
/// `payed_amount` is carried as found: its absence or emptiness is only an error once the order is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResult {
    pub payee_code: String,
    pub bill_number: String,
    pub payed_amount: Option<String>,
}

pub fn check_payee(code: &str, expected: &str) -> Result<(), Rejection> {
    if code == expected {
        Ok(())
    } else {
        Err(Rejection::PayeeMismatch(code.to_string()))
    }
}

/// Runs every check that can be made without consulting the order store, in order:
/// envelope, XML, `BILL/PAYEE/CODE`, payee match, `BILL/BILL_NUMBER`.
pub fn screen_callback(data: Option<&str>, expected_payee: &str) -> Result<AuthorizationResult, Rejection> {
    let xml = decode_envelope(data)?;
    let doc = CallbackDocument::parse(xml)?;
    let payee_code = doc.require_text(ElementPath::PayeeCode)?;
    check_payee(&payee_code, expected_payee)?;
    let bill_number = doc.require_text(ElementPath::BillNumber)?;
    let payed_amount = doc.find_text(ElementPath::PayedAmount);
    Ok(AuthorizationResult { payee_code, bill_number, payed_amount })
}
