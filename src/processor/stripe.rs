use crate::processor::{Customer, ProcessorClient};
use anyhow::Result;

pub struct StripeProcessor {
    pub base_url: String,
    pub secret_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl ProcessorClient for StripeProcessor {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn retrieve_customer(&self, customer_id: &str) -> Result<Customer> {
        let url = format!("{}/v1/customers/{}", self.base_url, customer_id);
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.secret_key)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!(
                "customer lookup failed with HTTP_{}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            );
        }

        Ok(resp.json::<Customer>().await?)
    }
}
