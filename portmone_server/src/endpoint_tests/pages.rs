use actix_web::{test::TestRequest, web::ServiceConfig};

use super::helpers::send;
use crate::routes::{health, payment_fail, payment_success};

fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health).service(payment_success).service(payment_fail);
}

#[actix_web::test]
async fn success_page() {
    for req in [TestRequest::get(), TestRequest::post()] {
        let res = send(req.uri("/portmone/success"), configure).await;
        assert_eq!(res.status.as_u16(), 200);
        assert_eq!(res.content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert!(res.body.contains("Your payment was successful"));
    }
}

#[actix_web::test]
async fn fail_page() {
    let res = send(TestRequest::get().uri("/portmone/fail"), configure).await;
    assert_eq!(res.status.as_u16(), 200);
    assert!(res.body.contains("Payment failed"));
}

#[actix_web::test]
async fn health_check() {
    let res = send(TestRequest::get().uri("/health"), configure).await;
    assert_eq!(res.status.as_u16(), 200);
}
