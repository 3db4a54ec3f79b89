use std::net::SocketAddr;

use actix_web::{test, test::TestRequest, web, App};
use portmone_engine::{CallbackApi, VerifierConfig};

use super::{helpers::*, mocks::MockOrderLookup};
use crate::{config::OriginPolicy, routes::AuthorizeResultRoute};

const PORTMONE_IP: &str = "185.60.212.10";

fn peer(ip: &str) -> SocketAddr {
    SocketAddr::new(ip.parse().unwrap(), 44321)
}

fn whitelist() -> OriginPolicy {
    OriginPolicy::new(vec![PORTMONE_IP.parse().unwrap()])
}

fn store_with_order() -> MockOrderLookup {
    let mut store = MockOrderLookup::new();
    store.expect_fetch_order_by_bill_number().returning(|b| Ok(Some(order(b))));
    store
}

fn store_never_called() -> MockOrderLookup {
    let mut store = MockOrderLookup::new();
    store.expect_fetch_order_by_bill_number().never();
    store
}

fn valid_callback() -> TestRequest {
    post_callback(&callback_payload(PAYEE, "ORD-1", Some("99.90")))
}

async fn call(req: TestRequest, store: MockOrderLookup, policy: OriginPolicy) -> (TestResponse, Received) {
    let (hooks, received) = recording_hooks();
    let configure = configure_callback(store, VerifierConfig::new(PAYEE), hooks, policy);
    (send(req, configure).await, received)
}

#[actix_web::test]
async fn disabled_guard_lets_anyone_through() {
    let _ = env_logger::try_init().ok();
    let (res, received) =
        call(valid_callback().peer_addr(peer("203.0.113.5")), store_with_order(), OriginPolicy::disabled()).await;
    assert_xml_reply(&res, 200, OK_BODY);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn whitelisted_peer_is_allowed() {
    let (res, received) = call(valid_callback().peer_addr(peer(PORTMONE_IP)), store_with_order(), whitelist()).await;
    assert_xml_reply(&res, 200, OK_BODY);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn unknown_peer_is_forbidden_before_anything_else() {
    let (res, received) = call(valid_callback().peer_addr(peer("203.0.113.5")), store_never_called(), whitelist()).await;
    assert_eq!(res.status.as_u16(), 403);
    assert!(res.body.is_empty(), "was: {}", res.body);
    assert!(received.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn forbidden_even_with_garbage_payload() {
    let req = post_callback("this is not xml").peer_addr(peer("203.0.113.5"));
    let (res, _) = call(req, store_never_called(), whitelist()).await;
    assert_eq!(res.status.as_u16(), 403);
    assert!(res.body.is_empty());
}

#[actix_web::test]
async fn last_forwarded_hop_is_trusted() {
    let req = valid_callback()
        .peer_addr(peer("10.0.0.2"))
        .insert_header(("X-Forwarded-For", format!("203.0.113.5, {PORTMONE_IP}")));
    let (res, received) = call(req, store_with_order(), whitelist()).await;
    assert_xml_reply(&res, 200, OK_BODY);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn empty_forwarded_for_uses_the_peer() {
    let req = valid_callback().peer_addr(peer(PORTMONE_IP)).insert_header(("X-Forwarded-For", ""));
    let (res, received) = call(req, store_with_order(), whitelist()).await;
    assert_xml_reply(&res, 200, OK_BODY);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn spoofed_first_hop_is_ignored() {
    let req = valid_callback()
        .peer_addr(peer(PORTMONE_IP))
        .insert_header(("X-Forwarded-For", format!("{PORTMONE_IP}, 203.0.113.5")));
    let (res, received) = call(req, store_never_called(), whitelist()).await;
    assert_eq!(res.status.as_u16(), 403);
    assert!(received.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn missing_policy_is_refused() {
    let (hooks, _) = recording_hooks();
    let api = CallbackApi::new(store_never_called(), VerifierConfig::new(PAYEE), hooks);
    let app = App::new().app_data(web::Data::new(api)).service(AuthorizeResultRoute::<MockOrderLookup>::new());
    let app = test::init_service(app).await;
    let req = valid_callback().peer_addr(peer(PORTMONE_IP)).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 403);
}
