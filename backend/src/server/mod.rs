//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use user_registry::ApiDoc;
use user_registry::domain::UsersService;
use user_registry::inbound::http::ErrorTranslator;
use user_registry::inbound::http::app::{AppDependencies, build_app};
use user_registry::inbound::http::health::HealthState;
use user_registry::inbound::http::state::HttpState;
use user_registry::outbound::memory::InMemoryUserRepository;

fn build_repository(config: &ServerConfig) -> InMemoryUserRepository {
    if config.start_empty {
        InMemoryUserRepository::new()
    } else {
        InMemoryUserRepository::seeded()
    }
}

/// Construct an Actix HTTP server over a fresh user directory.
///
/// The directory is shared by every worker. Readiness is flagged once the
/// listener is bound; liveness fails once an interrupt is received.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let repository = build_repository(&config);
    let ServerConfig {
        bind_addr,
        start_empty,
        clock,
    } = config;
    let http_state = web::Data::new(HttpState::from_service(UsersService::new(Arc::new(
        repository,
    ))));
    let translator = ErrorTranslator::new(clock);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            translator: translator.clone(),
        });

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, start_empty, "user registry listening");
    health_state.mark_ready();
    watch_for_shutdown(health_state);
    Ok(server)
}

/// Fail liveness once an interrupt arrives, while workers drain.
fn watch_for_shutdown(health_state: web::Data<HealthState>) {
    actix_web::rt::spawn(async move {
        match actix_web::rt::signal::ctrl_c().await {
            Ok(()) => {
                info!("interrupt received; failing liveness probe");
                health_state.mark_unhealthy();
            }
            Err(error) => warn!(%error, "failed to listen for interrupts"),
        }
    });
}
