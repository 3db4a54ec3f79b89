//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. The order lookup and the event subscribers are awaited, so they
//! must be expressed as futures and never block the worker.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use portmone_engine::{CallbackApi, OrderStore};
use serde::Deserialize;

use crate::{errors::ServerError, responses::callback_response};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+ where origin_guarded)  => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds)++ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .route(actix_web::web::route().guard(actix_web::guard::$method()).to($name::<A>))
                    .default_service(actix_web::web::to(|| async { actix_web::HttpResponse::MethodNotAllowed() }))
                    .wrap($crate::middleware::OriginGuardFactory::new());
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Callback  ----------------------------------------------------
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackForm {
    pub data: Option<String>,
}

route!(authorize_result => Post "/portmone/result" impl OrderStore where origin_guarded);
/// Route handler for Portmone's authorization result callback.
///
/// Portmone posts a urlencoded form with a single `data` field holding the result as an XML document. The reply is
/// always one of the fixed XML documents in [`crate::responses`]: `OK` for verified payments *and* for unknown
/// orders, `No valid xml data` or `Validation Error` otherwise.
///
/// Order store failures, and subscriber failures under the `fail` policy, are answered with a 500 so that Portmone
/// tries again later.
pub async fn authorize_result<B>(
    form: Result<web::Form<CallbackForm>, actix_web::Error>,
    api: web::Data<CallbackApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStore,
{
    trace!("💻️ Received Portmone callback");
    let data = match &form {
        Ok(form) => form.data.as_deref(),
        Err(e) => {
            debug!("💻️ Could not read the callback form. {e}");
            None
        },
    };
    let outcome = api.process_callback(data).await?;
    let code = outcome.result_code();
    if code.is_success() {
        debug!("💻️ Acknowledging Portmone callback with {code}");
    } else {
        info!("💻️ Answering Portmone callback with {code}");
    }
    Ok(callback_response(code))
}

//----------------------------------------------   Pages  ----------------------------------------------------
const SUCCESS_PAGE: &str = include_str!("./pages/success.html");
const FAIL_PAGE: &str = include_str!("./pages/fail.html");

#[actix_web::route("/portmone/success", method = "GET", method = "POST")]
pub async fn payment_success() -> impl Responder {
    trace!("💻️ Serving payment success page");
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(SUCCESS_PAGE)
}

#[actix_web::route("/portmone/fail", method = "GET", method = "POST")]
pub async fn payment_fail() -> impl Responder {
    trace!("💻️ Serving payment failure page");
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(FAIL_PAGE)
}
