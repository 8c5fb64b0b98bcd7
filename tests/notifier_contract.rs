use payments_reconciler::domain::order::CartItem;
use payments_reconciler::service::notifier::{PaymentDetails, PaymentSuccessNotice};

fn sample_notice() -> PaymentSuccessNotice {
    PaymentSuccessNotice {
        order_id: "507f1f77bcf86cd799439011".to_string(),
        order_details: vec![CartItem {
            id: "m1".to_string(),
            name: "Margherita".to_string(),
            price: 9.5,
            quantity: 1,
            order_id: "507f1f77bcf86cd799439011".to_string(),
            restaurant_id: Some("r1".to_string()),
        }],
        payment_details: PaymentDetails {
            session_id: "cs_test_a1b2c3".to_string(),
            customer_id: "cus_OqRsTu".to_string(),
            amount: 2599,
            currency: "usd".to_string(),
        },
    }
}

#[test]
fn notice_serializes_with_backend_field_names() {
    let body = serde_json::to_value(sample_notice()).expect("serializes");

    assert_eq!(body["orderId"], "507f1f77bcf86cd799439011");
    assert!(body["orderDetails"].is_array());
    assert_eq!(body["paymentDetails"]["sessionId"], "cs_test_a1b2c3");
    assert_eq!(body["paymentDetails"]["customerId"], "cus_OqRsTu");
    assert_eq!(body["paymentDetails"]["amount"], 2599);
    assert_eq!(body["paymentDetails"]["currency"], "usd");
}

#[test]
fn cart_items_keep_camel_case_keys() {
    let body = serde_json::to_value(sample_notice()).expect("serializes");
    let item = &body["orderDetails"][0];

    assert_eq!(item["orderId"], "507f1f77bcf86cd799439011");
    assert_eq!(item["restaurantId"], "r1");
    assert_eq!(item["quantity"], 1);
}

#[test]
fn absent_restaurant_id_is_omitted() {
    let mut notice = sample_notice();
    notice.order_details[0].restaurant_id = None;

    let body = serde_json::to_value(notice).expect("serializes");
    assert!(body["orderDetails"][0].get("restaurantId").is_none());
}
