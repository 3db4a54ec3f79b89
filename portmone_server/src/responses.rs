//! Replies to Portmone.
//!
//! Every callback outcome maps to one of three fixed XML documents. Nothing from the request is ever echoed back.
use actix_web::{http::StatusCode, HttpResponse};
use portmone_engine::callback::ResultCode;

pub const XML_CONTENT_TYPE: &str = "text/xml";

pub fn status_for(code: ResultCode) -> StatusCode {
    match code {
        ResultCode::Ok => StatusCode::OK,
        ResultCode::NoValidXml | ResultCode::ValidationError => StatusCode::BAD_REQUEST,
    }
}

pub fn callback_response(code: ResultCode) -> HttpResponse {
    HttpResponse::build(status_for(code)).content_type(XML_CONTENT_TYPE).body(code.as_xml())
}
