use serde_json::json;

use crate::helper::{get, spawn_app};

const NOT_FOUND_DETAIL: &str =
    "Oh Human! It is not a good day for us... We couldn't find your Customer :(";

#[tokio::test]
async fn known_customers_are_greeted() {
    let cases = [
        ("A", "Hi!"),
        ("B", "Dear Sir or Madam!"),
        ("C", "Moin!"),
    ];
    for (customer, greeting) in cases {
        let address = spawn_app(Some(customer)).await;

        let res = get(&address).await;
        assert_eq!(200, res.status().as_u16(), "customer {customer}");

        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(json!({"response": greeting}), body, "customer {customer}");
    }
}

#[tokio::test]
async fn missing_customer_returns_404() {
    let address = spawn_app(None).await;

    let res = get(&address).await;
    assert_eq!(404, res.status().as_u16());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(json!({"detail": NOT_FOUND_DETAIL}), body);
}

#[tokio::test]
async fn unknown_customers_return_404() {
    for customer in ["", "D", "a", " A", "B ", "customer"] {
        let address = spawn_app(Some(customer)).await;

        let res = get(&address).await;
        assert_eq!(404, res.status().as_u16(), "customer {customer:?}");

        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            json!({"detail": NOT_FOUND_DETAIL}),
            body,
            "customer {customer:?}"
        );
    }
}

#[tokio::test]
async fn repeated_requests_get_the_same_response() {
    let address = spawn_app(Some("B")).await;

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let res = get(&address).await;
        assert_eq!(200, res.status().as_u16());
        bodies.push(res.text().await.unwrap());
    }
    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}
