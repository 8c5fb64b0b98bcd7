use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;

pub mod mock;
pub mod stripe;

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[async_trait::async_trait]
pub trait ProcessorClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn retrieve_customer(&self, customer_id: &str) -> Result<Customer>;
}
