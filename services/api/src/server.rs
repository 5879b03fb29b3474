use crate::cli::ServeArgs;
use crate::infra::{AppState, RuntimeStore};
use crate::routes::with_transfer_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use unitransfer::config::AppConfig;
use unitransfer::error::AppError;
use unitransfer::telemetry;
use unitransfer::workflows::transfer::{RequestStore, TransferRequestService};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(backend) = args.store.take() {
        config.store.backend = backend;
    }
    if let Some(db_path) = args.db_path.take() {
        config.store.db_path = db_path;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(RuntimeStore::from_config(&config.store));
    store.initialize()?;
    info!(backend = store.describe(), "request store ready");

    let service = Arc::new(TransferRequestService::new(store));

    let app = with_transfer_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "credit transfer portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
