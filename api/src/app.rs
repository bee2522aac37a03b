//! Application state and factory
//!
//! Holds the shared top-up service and builds the Actix-web application
//! around it. Generic over the provider so tests can plug in a fake one.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use tu_core::services::{AirtimeProvider, TopUpService};
use tu_shared::types::ErrorBody;

use crate::routes::health::health_check;
use crate::routes::topup::{method_not_allowed, topup, MAX_BODY_BYTES};

/// Application state that holds shared services
pub struct AppState<P: AirtimeProvider> {
    pub topup_service: Arc<TopUpService<P>>,
}

impl<P: AirtimeProvider> AppState<P> {
    pub fn new(topup_service: TopUpService<P>) -> Self {
        Self {
            topup_service: Arc::new(topup_service),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: AirtimeProvider + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/api/topup")
                .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
                .route(web::post().to(topup::<P>))
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("not_found"))
}
