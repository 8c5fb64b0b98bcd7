use anyhow::Result;
use sqlx::{Postgres, Transaction};

pub struct EventLedgerRepo;

impl EventLedgerRepo {
    pub async fn try_claim_tx(
        tx: &mut Transaction<'_, Postgres>,
        event_key: &str,
        event_type: &str,
    ) -> Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO processed_events (event_key, event_type, claimed_at)
            VALUES ($1, $2, now())
            ON CONFLICT (event_key, event_type) DO NOTHING
            "#,
        )
        .bind(event_key)
        .bind(event_type)
        .execute(tx.as_mut())
        .await;

        match res {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some("23505") => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
