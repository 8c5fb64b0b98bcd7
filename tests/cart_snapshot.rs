use payments_reconciler::domain::order::cart_from_metadata;
use std::collections::HashMap;

fn metadata_with_cart(cart: &str) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert("userId".to_string(), "u_123".to_string());
    metadata.insert("cart".to_string(), cart.to_string());
    metadata
}

#[test]
fn parses_cart_snapshot_from_customer_metadata() {
    let metadata = metadata_with_cart(
        r#"[
            {"id":"m1","name":"Margherita","price":9.5,"quantity":1,
             "restaurantId":"r1","orderId":"507f1f77bcf86cd799439011"},
            {"id":"m2","name":"Garlic Bread","price":3.25,"quantity":2,
             "restaurantId":"r1","orderId":"507f1f77bcf86cd799439011"}
        ]"#,
    );

    let cart = cart_from_metadata(&metadata).expect("cart parses");
    assert_eq!(cart.len(), 2);
    assert_eq!(cart[0].order_id, "507f1f77bcf86cd799439011");
    assert_eq!(cart[1].name, "Garlic Bread");
    assert_eq!(cart[1].quantity, 2);
}

#[test]
fn missing_cart_key_yields_none() {
    let mut metadata = HashMap::new();
    metadata.insert("userId".to_string(), "u_123".to_string());
    assert!(cart_from_metadata(&metadata).is_none());
}

#[test]
fn empty_cart_yields_none() {
    assert!(cart_from_metadata(&metadata_with_cart("[]")).is_none());
}

#[test]
fn unparseable_cart_yields_none() {
    assert!(cart_from_metadata(&metadata_with_cart("{broken")).is_none());
    assert!(cart_from_metadata(&metadata_with_cart("\"just a string\"")).is_none());
}

#[test]
fn items_without_order_id_still_parse_but_fail_validation() {
    let metadata = metadata_with_cart(r#"[{"id":"m1","name":"Margherita","price":9.5,"quantity":1}]"#);
    let cart = cart_from_metadata(&metadata).expect("cart parses");
    assert!(!payments_reconciler::domain::order::is_valid_order_id(&cart[0].order_id));
}
