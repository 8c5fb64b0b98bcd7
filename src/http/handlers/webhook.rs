use crate::signature;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header = match headers.get("Stripe-Signature").and_then(|h| h.to_str().ok()) {
        Some(value) => value,
        None => {
            tracing::warn!("webhook rejected: missing Stripe-Signature header");
            return (StatusCode::BAD_REQUEST, "missing Stripe-Signature header".to_string());
        }
    };

    let now = chrono::Utc::now().timestamp();
    let event = match signature::verify_event(
        &body,
        header,
        &state.webhook_secret,
        state.signature_tolerance_secs,
        now,
    ) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!("webhook rejected: {}", err);
            return (StatusCode::BAD_REQUEST, format!("webhook error: {}", err));
        }
    };

    tracing::info!("verified webhook event {} ({})", event.id, event.event_type);

    match state.reconciler.apply(&event).await {
        Ok(outcome) => {
            tracing::info!("event {} ({}) -> {:?}", event.id, event.event_type, outcome);
            (StatusCode::OK, "Webhook received".to_string())
        }
        Err(err) => {
            tracing::error!(
                "event {} ({}) hit a transient failure, requesting redelivery: {}",
                event.id,
                event.event_type,
                err
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "reconciliation failed".to_string())
        }
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
