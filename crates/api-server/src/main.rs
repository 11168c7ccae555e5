//! Request-tracking service: a REST API over the flat-file store in
//! `bookwise-core`. All state lives in a single JSON document; the
//! store serializes access within this process only.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use bookwise_core::RequestStore;
use parking_lot::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATA_FILE: &str = "requests.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=info,bookwise_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("BOOKWISE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("BOOKWISE_ADDR is not a valid socket address")?;
    let data_file =
        std::env::var("BOOKWISE_DATA").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());

    info!(%addr, data_file, "starting request-tracking service");

    let store = Arc::new(Mutex::new(RequestStore::new(data_file)));
    let app = routes::router(store);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
