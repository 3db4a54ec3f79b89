use std::fmt::Display;

const OK_MSG: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><RESULT><ERROR_CODE>0</ERROR_CODE><REASON>OK</REASON></RESULT>"#;
const NO_VALID_XML_MSG: &str = r#"<?xml version="1.0" encoding="UTF-8"?><RESULT><ERROR_CODE>1</ERROR_CODE><REASON>No valid xml data</REASON></RESULT>"#;
const VALIDATION_ERROR_MSG: &str = r#"<?xml version="1.0" encoding="UTF-8"?><RESULT><ERROR_CODE>2</ERROR_CODE><REASON>Validation Error</REASON></RESULT>"#;

/// The acknowledgement codes Portmone understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    NoValidXml,
    ValidationError,
}

impl ResultCode {
    pub fn error_code(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::NoValidXml => 1,
            Self::ValidationError => 2,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NoValidXml => "No valid xml data",
            Self::ValidationError => "Validation Error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The complete response document. These are constants and never contain request data.
    pub fn as_xml(&self) -> &'static str {
        match self {
            Self::Ok => OK_MSG,
            Self::NoValidXml => NO_VALID_XML_MSG,
            Self::ValidationError => VALIDATION_ERROR_MSG,
        }
    }
}

impl Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error_code(), self.reason())
    }
}
