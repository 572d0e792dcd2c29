//! Application factory shared by the server binary and tests.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::inbound::http::error::route_not_found;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{json_config, path_config, query_config};
use crate::inbound::http::{ErrorTranslator, users};
use crate::middleware::{CatchAll, Trace};

/// Everything the application needs per worker.
#[derive(Clone)]
pub struct AppDependencies {
    /// Probe state shared with the server bootstrap.
    pub health_state: web::Data<HealthState>,
    /// Port implementations for handlers.
    pub http_state: web::Data<HttpState>,
    /// Failure translator installed at the boundary.
    pub translator: ErrorTranslator,
}

/// Build the application: users routes, health probes, extractor error
/// handlers, the catch-all failure boundary and request tracing.
///
/// `Trace` wraps `CatchAll`, so translated failures are logged with the
/// request's trace id in scope.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        translator,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(path_config())
        .app_data(query_config())
        .app_data(json_config())
        .configure(users::configure)
        .service(ready)
        .service(live)
        .default_service(web::to(route_not_found))
        .wrap(CatchAll::new(translator))
        .wrap(Trace)
}
