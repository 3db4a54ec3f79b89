use std::sync::{Arc, Mutex};

use actix_web::{
    body::MessageBody,
    http::{header::CONTENT_TYPE, StatusCode},
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use chrono::Utc;
use log::debug;
use portmone_engine::{
    db_types::OrderRecord,
    events::{EventHooks, VerifiedAuthorization},
    CallbackApi,
    OrderStore,
    VerifierConfig,
};

use crate::{config::OriginPolicy, routes::AuthorizeResultRoute};

pub const PAYEE: &str = "1234";
pub const RESULT_PATH: &str = "/portmone/result";

pub fn callback_payload(payee: &str, bill_number: &str, amount: Option<&str>) -> String {
    let amount = amount.map(|a| format!("<PAYED_AMOUNT>{a}</PAYED_AMOUNT>")).unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<BILLS>
  <BILL>
    <PAYEE><CODE>{payee}</CODE><NAME>Test shop</NAME></PAYEE>
    <BILL_NUMBER>{bill_number}</BILL_NUMBER>
    {amount}
    <AUTH_CODE>DMA123</AUTH_CODE>
  </BILL>
</BILLS>"#
    )
}

pub fn order(bill_number: &str) -> OrderRecord {
    OrderRecord { id: 1, bill_number: bill_number.to_string(), created_at: Utc::now() }
}

pub fn post_callback(data: &str) -> TestRequest {
    TestRequest::post().uri(RESULT_PATH).set_form([("data", data)])
}

pub type Received = Arc<Mutex<Vec<VerifiedAuthorization>>>;

pub fn recording_hooks() -> (EventHooks, Received) {
    let received = Received::default();
    let r2 = received.clone();
    let mut hooks = EventHooks::default();
    hooks.on_authorization_verified(move |ev| {
        let received = r2.clone();
        Box::pin(async move {
            received.lock().unwrap().push(ev);
            Ok(())
        })
    });
    (hooks, received)
}

pub fn configure_callback<B>(
    store: B,
    config: VerifierConfig,
    hooks: EventHooks,
    policy: OriginPolicy,
) -> impl FnOnce(&mut ServiceConfig)
where
    B: OrderStore + 'static,
{
    move |cfg| {
        let api = CallbackApi::new(store, config, hooks);
        cfg.app_data(web::Data::new(api))
            .app_data(web::Data::new(policy))
            .service(AuthorizeResultRoute::<B>::new());
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

pub async fn send<F>(req: TestRequest, configure: F) -> TestResponse
where F: FnOnce(&mut ServiceConfig) {
    let app = test::init_service(App::new().configure(configure)).await;
    debug!("Making request");
    let (_, res) = test::call_service(&app, req.to_request()).await.into_parts();
    let status = res.status();
    let content_type = res.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(String::from);
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    TestResponse { status, content_type, body }
}

pub const OK_BODY: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><RESULT><ERROR_CODE>0</ERROR_CODE><REASON>OK</REASON></RESULT>"#;
pub const NO_VALID_XML_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?><RESULT><ERROR_CODE>1</ERROR_CODE><REASON>No valid xml data</REASON></RESULT>"#;
pub const VALIDATION_ERROR_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?><RESULT><ERROR_CODE>2</ERROR_CODE><REASON>Validation Error</REASON></RESULT>"#;

pub fn assert_xml_reply(res: &TestResponse, status: u16, body: &str) {
    assert_eq!(res.status.as_u16(), status, "body was: {}", res.body);
    assert_eq!(res.content_type.as_deref(), Some("text/xml"));
    assert_eq!(res.body, body);
}
