use crate::processor::{Customer, ProcessorClient};
use anyhow::Result;
use std::collections::HashMap;

pub struct MockProcessor {
    pub metadata: HashMap<String, String>,
    pub fail_lookups: bool,
}

#[async_trait::async_trait]
impl ProcessorClient for MockProcessor {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn retrieve_customer(&self, customer_id: &str) -> Result<Customer> {
        if self.fail_lookups {
            anyhow::bail!("mock processor unavailable");
        }

        Ok(Customer {
            id: customer_id.to_string(),
            metadata: self.metadata.clone(),
        })
    }
}
