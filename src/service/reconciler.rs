use crate::domain::event::{CheckoutSession, EventEnvelope, EventKind, PaymentIntent};
use crate::domain::order::{cart_from_metadata, is_valid_order_id};
use crate::domain::payment::{items_from_metadata, PaymentStatus};
use crate::processor::ProcessorClient;
use crate::repo::event_ledger_repo::EventLedgerRepo;
use crate::repo::orders_repo::OrdersRepo;
use crate::repo::payment_records_repo::{PaymentRecordInput, PaymentRecordsRepo};
use crate::service::notifier::{BackendNotifier, PaymentDetails, PaymentSuccessNotice};
use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Applied,
    DuplicateEvent,
    AlreadySettled,
    InvalidOrderReference,
    OrderNotFound,
    CartSnapshotMissing,
    MalformedObject,
    UnhandledEventType,
}

#[derive(Clone)]
pub struct ReconcileService {
    pub pool: PgPool,
    pub orders_repo: OrdersRepo,
    pub processor: Arc<dyn ProcessorClient>,
    pub notifier: BackendNotifier,
}

impl ReconcileService {
    pub async fn apply(&self, event: &EventEnvelope) -> Result<ReconcileOutcome> {
        match event.kind() {
            EventKind::CheckoutCompleted => self.apply_checkout_completed(event).await,
            EventKind::PaymentSucceeded => {
                self.apply_intent_outcome(event, PaymentStatus::Succeeded).await
            }
            EventKind::PaymentFailed => {
                self.apply_intent_outcome(event, PaymentStatus::Failed).await
            }
            EventKind::Unknown => {
                tracing::info!("event {}: unhandled type {}, acknowledging", event.id, event.event_type);
                Ok(ReconcileOutcome::UnhandledEventType)
            }
        }
    }

    async fn apply_checkout_completed(&self, event: &EventEnvelope) -> Result<ReconcileOutcome> {
        let session: CheckoutSession = match serde_json::from_value(event.data.object.clone()) {
            Ok(session) => session,
            Err(err) => {
                tracing::error!("event {}: checkout session failed to decode: {}", event.id, err);
                return Ok(ReconcileOutcome::MalformedObject);
            }
        };

        if session.id.is_empty() {
            tracing::error!("event {}: checkout session without id", event.id);
            return Ok(ReconcileOutcome::MalformedObject);
        }

        let customer_id = match session.customer.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                tracing::error!("event {}: session {} has no customer", event.id, session.id);
                return Ok(ReconcileOutcome::CartSnapshotMissing);
            }
        };

        let customer = self.processor.retrieve_customer(customer_id).await?;
        let cart = match cart_from_metadata(&customer.metadata) {
            Some(items) => items,
            None => {
                tracing::error!(
                    "event {}: customer {} metadata carries no cart snapshot",
                    event.id,
                    customer_id
                );
                return Ok(ReconcileOutcome::CartSnapshotMissing);
            }
        };

        let order_id = cart[0].order_id.clone();
        if !is_valid_order_id(&order_id) {
            tracing::error!("event {}: invalid order reference {:?}", event.id, order_id);
            return Ok(ReconcileOutcome::InvalidOrderReference);
        }

        if self.orders_repo.find_by_id(&order_id).await?.is_none() {
            tracing::error!("event {}: order {} not found", event.id, order_id);
            return Ok(ReconcileOutcome::OrderNotFound);
        }

        let mut tx = self.pool.begin().await?;
        if !EventLedgerRepo::try_claim_tx(&mut tx, &session.id, &event.event_type).await? {
            tx.rollback().await?;
            tracing::info!("event {}: session {} already processed, skipping", event.id, session.id);
            return Ok(ReconcileOutcome::DuplicateEvent);
        }
        let updated = OrdersRepo::complete_if_unpaid_tx(&mut tx, &order_id).await?;
        tx.commit().await?;

        if updated == 0 {
            tracing::info!("event {}: order {} already completed", event.id, order_id);
            return Ok(ReconcileOutcome::AlreadySettled);
        }

        tracing::info!("event {}: order {} completed and placed", event.id, order_id);

        let notice = PaymentSuccessNotice {
            order_id,
            order_details: cart,
            payment_details: PaymentDetails {
                session_id: session.id,
                customer_id: customer_id.to_string(),
                amount: session.amount_total.unwrap_or(0),
                currency: session.currency.unwrap_or_else(|| "usd".to_string()),
            },
        };
        self.notifier.notify_payment_success(&notice).await;

        Ok(ReconcileOutcome::Applied)
    }

    async fn apply_intent_outcome(
        &self,
        event: &EventEnvelope,
        status: PaymentStatus,
    ) -> Result<ReconcileOutcome> {
        let intent: PaymentIntent = match serde_json::from_value(event.data.object.clone()) {
            Ok(intent) => intent,
            Err(err) => {
                tracing::error!("event {}: payment intent failed to decode: {}", event.id, err);
                return Ok(ReconcileOutcome::MalformedObject);
            }
        };

        if intent.id.is_empty() {
            tracing::error!("event {}: payment intent without id", event.id);
            return Ok(ReconcileOutcome::MalformedObject);
        }

        let record = PaymentRecordInput {
            intent_id: intent.id.clone(),
            customer_id: intent.customer.clone().unwrap_or_default(),
            amount_minor: intent.amount,
            currency: intent.currency.clone(),
            status,
            items: items_from_metadata(&intent.metadata),
        };

        let mut tx = self.pool.begin().await?;
        if !EventLedgerRepo::try_claim_tx(&mut tx, &intent.id, &event.event_type).await? {
            tx.rollback().await?;
            tracing::info!("event {}: intent {} already processed, skipping", event.id, intent.id);
            return Ok(ReconcileOutcome::DuplicateEvent);
        }
        let applied = PaymentRecordsRepo::upsert_outcome_tx(&mut tx, &record).await?;
        tx.commit().await?;

        if applied == 0 {
            tracing::info!(
                "event {}: intent {} already in terminal status, {} ignored",
                event.id,
                intent.id,
                status.as_str()
            );
            return Ok(ReconcileOutcome::AlreadySettled);
        }

        tracing::info!(
            "event {}: payment record for intent {} marked {}",
            event.id,
            intent.id,
            status.as_str()
        );
        Ok(ReconcileOutcome::Applied)
    }
}
