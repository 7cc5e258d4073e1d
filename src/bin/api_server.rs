// src/bin/api_server.rs

use portfolio_cms::infra::telemetry;
use portfolio_cms::transport;
use portfolio_cms::{AppConfig, PortfolioService};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return Err(e);
        }
    };

    // --- Store + default data ---
    tracing::info!(schema = %config.db_name, "connecting to the document store");
    let service = match PortfolioService::connect(&config).await {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!(error = ?e, "failed to start application");
            return Err(e);
        }
    };
    tracing::info!("application started successfully");

    // --- API server ---
    let app = transport::http::build_app(transport::http::AppState::new(service.clone()));
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            service.close().await;
            return Err(e.into());
        }
    };
    tracing::info!(addr = %config.bind_addr, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutdown signal received");
        })
        .await;

    // The pool is released whether the server stopped cleanly or not.
    service.close().await;
    tracing::info!("application shutdown");

    served.map_err(Into::into)
}
