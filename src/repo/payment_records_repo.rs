use crate::domain::payment::{PaymentItem, PaymentStatus};
use anyhow::Result;
use sqlx::{Postgres, Transaction};

pub struct PaymentRecordInput {
    pub intent_id: String,
    pub customer_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub items: Vec<PaymentItem>,
}

pub struct PaymentRecordsRepo;

impl PaymentRecordsRepo {
    pub async fn upsert_outcome_tx(
        tx: &mut Transaction<'_, Postgres>,
        record: &PaymentRecordInput,
    ) -> Result<u64> {
        let done = sqlx::query(
            r#"
            INSERT INTO payment_records (intent_id, customer_id, amount_minor, currency, status, items_json)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (intent_id) DO UPDATE
            SET status = EXCLUDED.status, updated_at = now()
            WHERE payment_records.status = 'PENDING'
            "#,
        )
        .bind(&record.intent_id)
        .bind(&record.customer_id)
        .bind(record.amount_minor)
        .bind(&record.currency)
        .bind(record.status.as_str())
        .bind(serde_json::to_value(&record.items)?)
        .execute(tx.as_mut())
        .await?;

        Ok(done.rows_affected())
    }
}
