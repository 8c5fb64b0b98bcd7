use axum::routing::{get, post};
use axum::Router;
use payments_reconciler::config::AppConfig;
use payments_reconciler::processor::stripe::StripeProcessor;
use payments_reconciler::repo::orders_repo::OrdersRepo;
use payments_reconciler::service::notifier::BackendNotifier;
use payments_reconciler::service::reconciler::ReconcileService;
use payments_reconciler::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let orders_repo = OrdersRepo { pool: pool.clone() };
    let processor = Arc::new(StripeProcessor {
        base_url: cfg.stripe_base_url.clone(),
        secret_key: cfg.stripe_secret_key.clone(),
        timeout_ms: cfg.processor_timeout_ms,
        client: reqwest::Client::new(),
    });
    let notifier = BackendNotifier {
        base_url: cfg.backend_base_url.clone(),
        client: reqwest::Client::new(),
        timeout_ms: cfg.processor_timeout_ms,
    };

    let reconciler = ReconcileService {
        pool: pool.clone(),
        orders_repo,
        processor,
        notifier,
    };

    let state = AppState {
        reconciler,
        webhook_secret: cfg.stripe_webhook_secret.clone(),
        signature_tolerance_secs: cfg.signature_tolerance_secs,
    };

    let app = Router::new()
        .route("/webhook", post(payments_reconciler::http::handlers::webhook::stripe_webhook))
        .route("/healthz", get(payments_reconciler::http::handlers::webhook::health))
        .route("/ops/readiness", get(payments_reconciler::http::handlers::ops::readiness))
        .route("/ops/liveness", get(payments_reconciler::http::handlers::ops::liveness))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
