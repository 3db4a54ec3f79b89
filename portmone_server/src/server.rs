use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use portmone_engine::{events::EventHooks, CallbackApi, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{health, payment_fail, payment_success, AuthorizeResultRoute},
};

pub async fn run_server(config: ServerConfig, hooks: EventHooks) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db, hooks)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    hooks: EventHooks,
) -> Result<Server, ServerError> {
    config.validate().map_err(|e| {
        error!("🚨️ Refusing to start. {e}");
        e
    })?;
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let callback_api = CallbackApi::new(db.clone(), config.verifier_config(), hooks.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("pmg::access_log"))
            .app_data(web::Data::new(callback_api))
            .app_data(web::Data::new(config.origin_policy()))
            .service(health)
            .service(AuthorizeResultRoute::<SqliteDatabase>::new())
            .service(payment_success)
            .service(payment_fail)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}

/// The default subscribers: verified payments are written to the log and nothing else.
pub fn logging_hooks() -> EventHooks {
    let mut hooks = EventHooks::default();
    hooks.on_authorization_verified(|event| {
        Box::pin(async move {
            info!("🔔️ Portmone payment of {} received for order {}", event.payed_amount, event.bill_number);
            Ok(())
        })
    });
    hooks
}
