#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::unused_async)]

use crate::{
    config::RuntimeConfiguration, data::postgres_store::PgStudentStore, render::MaudRenderer,
    routes::router, state::RosterState,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod data;
mod error;
mod maud_conveniences;
mod render;
mod routes;
mod state;

async fn shutdown_signal(store: PgStudentStore) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
    store.close().await;
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv {
        debug!(?e, "No .env file loaded, using process environment");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let db_config = config.db_config();

    let options = PgPoolOptions::new().max_connections(15);
    let store = PgStudentStore::new(options, db_config.connect_options())
        .await
        .expect("unable to connect to database");
    info!(
        host = db_config.host(),
        port = db_config.port(),
        database = db_config.database(),
        "Connected to database"
    );

    let app = router(RosterState::new(store.clone(), MaudRenderer));

    let server_ip = config.server_ip();
    let listener = TcpListener::bind(server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(store))
        .await
        .expect("unable to serve app");
}
