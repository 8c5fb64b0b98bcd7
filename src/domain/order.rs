use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(rename = "orderId", default)]
    pub order_id: String,
    #[serde(rename = "restaurantId", skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
}

pub fn cart_from_metadata(metadata: &HashMap<String, String>) -> Option<Vec<CartItem>> {
    let raw = metadata.get("cart")?;
    let items: Vec<CartItem> = serde_json::from_str(raw).ok()?;
    if items.is_empty() {
        return None;
    }
    Some(items)
}

pub fn is_valid_order_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_object_id_shaped_keys() {
        assert!(is_valid_order_id("507f1f77bcf86cd799439011"));
        assert!(is_valid_order_id("000000000000000000000000"));
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(!is_valid_order_id("not-an-id"));
        assert!(!is_valid_order_id("507F1F77BCF86CD799439011"));
        assert!(!is_valid_order_id("507f1f77bcf86cd79943901"));
        assert!(!is_valid_order_id("507f1f77bcf86cd7994390111"));
        assert!(!is_valid_order_id("507f1f77bcf86cd79943901z"));
        assert!(!is_valid_order_id(""));
    }
}
