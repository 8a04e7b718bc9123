use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryPointsRepository};
use crate::routes::with_receipt_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use receipt_points::config::AppConfig;
use receipt_points::error::AppError;
use receipt_points::scoring::ReceiptScoringService;
use receipt_points::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryPointsRepository::default());
    let scoring_service = Arc::new(ReceiptScoringService::new(repository));

    let app = with_receipt_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "receipt points service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
