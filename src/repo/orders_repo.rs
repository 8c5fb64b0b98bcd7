use anyhow::Result;
use sqlx::{PgPool, Postgres, Row, Transaction};

#[derive(Clone)]
pub struct OrdersRepo {
    pub pool: PgPool,
}

#[derive(Debug, Clone)]
pub struct StoredOrder {
    pub order_id: String,
    pub payment_status: String,
    pub order_status: String,
}

impl OrdersRepo {
    pub async fn find_by_id(&self, order_id: &str) -> Result<Option<StoredOrder>> {
        let row = sqlx::query(
            "SELECT order_id, payment_status, order_status FROM orders WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| StoredOrder {
            order_id: r.get("order_id"),
            payment_status: r.get("payment_status"),
            order_status: r.get("order_status"),
        }))
    }

    pub async fn complete_if_unpaid_tx(
        tx: &mut Transaction<'_, Postgres>,
        order_id: &str,
    ) -> Result<u64> {
        let done = sqlx::query(
            r#"
            UPDATE orders
            SET payment_status = 'COMPLETED', order_status = 'PLACED', updated_at = now()
            WHERE order_id = $1 AND payment_status = 'UNPAID'
            "#,
        )
        .bind(order_id)
        .execute(tx.as_mut())
        .await?;

        Ok(done.rows_affected())
    }
}
