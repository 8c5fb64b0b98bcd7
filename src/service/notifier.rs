use crate::domain::order::CartItem;
use anyhow::Result;
use serde::Serialize;

#[derive(Clone)]
pub struct BackendNotifier {
    pub base_url: String,
    pub client: reqwest::Client,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessNotice {
    pub order_id: String,
    pub order_details: Vec<CartItem>,
    pub payment_details: PaymentDetails,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub session_id: String,
    pub customer_id: String,
    pub amount: i64,
    pub currency: String,
}

impl BackendNotifier {
    pub async fn notify_payment_success(&self, notice: &PaymentSuccessNotice) {
        for attempt in 1..=2 {
            match self.post_notice(notice).await {
                Ok(()) => return,
                Err(err) => {
                    tracing::warn!(
                        "payment-success notification attempt {} for order {} failed: {}",
                        attempt,
                        notice.order_id,
                        err
                    );
                }
            }
        }

        tracing::error!(
            "giving up on payment-success notification for order {}",
            notice.order_id
        );
    }

    async fn post_notice(&self, notice: &PaymentSuccessNotice) -> Result<()> {
        let url = format!("{}/api/orders/payment-success", self.base_url);
        let resp = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(notice)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("backend responded with HTTP_{}", resp.status().as_u16());
        }

        Ok(())
    }
}
