//! Origin guard middleware for the Portmone callback route.
//!
//! It resolves the caller's address (see [`get_remote_ip`]) and checks it against the [`OriginPolicy`] registered as
//! app data. Callers that are not allowed receive an empty 403 Forbidden response and the wrapped service is never
//! called.
//!
//! If no `OriginPolicy` has been registered, every request is refused.

use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web,
    Error,
};
use futures::future::LocalBoxFuture;
use log::{error, trace, warn};

use crate::{config::OriginPolicy, errors::ServerError, helpers::get_remote_ip};

#[derive(Default)]
pub struct OriginGuardFactory;

impl OriginGuardFactory {
    pub fn new() -> Self {
        OriginGuardFactory
    }
}

impl<S, B> Transform<S, ServiceRequest> for OriginGuardFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B>>;
    type Transform = OriginGuardService<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OriginGuardService { service: Rc::new(service) }))
    }
}

pub struct OriginGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for OriginGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;
    type Response = ServiceResponse<EitherBody<B>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let Some(policy) = req.app_data::<web::Data<OriginPolicy>>().cloned() else {
                error!("🛡️ No origin policy has been configured. Denying access.");
                return Ok(req.error_response(ServerError::ForbiddenPeer).map_into_right_body());
            };
            if !policy.enabled {
                trace!("🛡️ Origin checks are disabled. Allowing request.");
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }
            let ip = get_remote_ip(req.request());
            if policy.permits(ip) {
                trace!("🛡️ Callback from {ip:?} is allowed ✅️");
                service.call(req).await.map(ServiceResponse::map_into_left_body)
            } else {
                warn!("🛡️ Callback from {ip:?} is not in the IP whitelist. Denying access.");
                Ok(req.error_response(ServerError::ForbiddenPeer).map_into_right_body())
            }
        })
    }
}
