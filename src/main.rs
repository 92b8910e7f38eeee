mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    infrastructure::{
        event_repository::PostgresEventRepository,
        registration_repository::PostgresRegistrationRepository,
        user_repository::PostgresUserRepository,
    },
    presentation::handlers::{
        event_handler::create_event_router, registration_handler::create_registration_router,
        user_handler::create_user_router,
    },
    usecase::{
        event_usecase::EventUsecase, registration_usecase::RegistrationUsecase,
        user_usecase::UserUsecase,
    },
};

#[derive(Serialize)]
struct Health {
    ok: bool,
    service: &'static str,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let config = Config::load()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(10).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    // `DatabaseConnection` is not `Clone` when sea-orm's `mock` feature is
    // enabled (it is, via dev-dependencies), so share it behind an Arc
    let db = Arc::new(db);

    let user_repository = PostgresUserRepository::new(db.clone());
    let event_repository = PostgresEventRepository::new(db.clone());
    let registration_repository = PostgresRegistrationRepository::new(db.clone());

    let user_service = UserUsecase::new(user_repository.clone());
    let event_service = EventUsecase::new(event_repository.clone());
    let registration_service =
        RegistrationUsecase::new(registration_repository, user_repository, event_repository);

    // The SPA dev server runs on its own origin
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?);

    let app = Router::new()
        .route("/healthz", get(health))
        .merge(create_user_router(user_service))
        .merge(create_event_router(event_service))
        .merge(create_registration_router(registration_service))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{addr}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: "event-api",
    })
}

async fn shutdown_signal() {
    let interrupt = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
