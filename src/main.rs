use std::{env, net::SocketAddr, net::TcpListener, process};

use tracing_subscriber::EnvFilter;
use vectrix_api::{app::env::Envy, AppState};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match Envy::from_env() {
        Ok(config) => config,
        Err(envy::Error::MissingValue(field)) => {
            tracing::error!(
                "{} is not set in the environment variables",
                field.to_uppercase()
            );
            process::exit(1);
        }
        Err(e) => {
            tracing::error!("invalid environment: {}", e);
            process::exit(1);
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], envy.port()));
    let listener = match TcpListener::bind(addr) {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };

    tracing::info!("serving {} from {}", envy.static_dir(), addr);

    let state = AppState::new(envy);
    if let Err(e) = vectrix_api::serve(listener, state, shutdown_signal()).await {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
