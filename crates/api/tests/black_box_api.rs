use std::sync::Arc;

use pizzeria_api::app::{build_app, services::AppServices};
use pizzeria_catalog::{Catalog, Item};
use pizzeria_orders::QuantityPolicy;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(catalog: Catalog, policy: QuantityPolicy) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(Arc::new(AppServices::in_memory(catalog, policy)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn menu() -> Self {
        Self::spawn(Catalog::default_menu(), QuantityPolicy::AllowAny).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_order(
    client: &reqwest::Client,
    base_url: &str,
    body: serde_json::Value,
) -> reqwest::Response {
    client
        .post(format!("{}/orders", base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn list_orders(client: &reqwest::Client, base_url: &str) -> Vec<serde_json::Value> {
    let res = client
        .get(format!("{}/orders", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

fn assert_json(res: &reqwest::Response) {
    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .expect("content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("application/json"), "{content_type}");
}

#[tokio::test]
async fn pizzeria_scenario_end_to_end() {
    let srv = TestServer::menu().await;
    let client = reqwest::Client::new();

    let res = post_order(&client, &srv.base_url, json!({"item_id": 1, "quantity": 2})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_json(&res);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created, json!({"item_id": 1, "quantity": 2, "total": 24}));
    assert_eq!(list_orders(&client, &srv.base_url).await.len(), 1);

    let res = post_order(&client, &srv.base_url, json!({"item_id": 99, "quantity": 1})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_json(&res);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().unwrap().contains("99"));

    let res = client
        .get(format!("{}/pizzas", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_json(&res);
    let pizzas: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        pizzas,
        json!([
            {"id": 1, "name": "Pepperoni", "unit_price": 12},
            {"id": 2, "name": "Capricciosa", "unit_price": 11},
            {"id": 3, "name": "Margherita", "unit_price": 10},
        ])
    );

    let orders = list_orders(&client, &srv.base_url).await;
    assert_eq!(orders, vec![json!({"item_id": 1, "quantity": 2, "total": 24})]);
}

#[tokio::test]
async fn empty_catalog_is_not_found_for_every_endpoint() {
    let srv = TestServer::spawn(Catalog::empty(), QuantityPolicy::AllowAny).await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/pizzas", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_json(&res);

    let res = client.get(format!("{}/orders", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Catalog check happens before the body is decoded.
    let res = client
        .post(format!("{}/orders", srv.base_url))
        .body("definitely not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn malformed_bodies_never_touch_the_ledger() {
    let srv = TestServer::menu().await;
    let client = reqwest::Client::new();

    for raw in ["", "{", r#"{"item_id": 1}"#, r#"{"item_id": "1", "quantity": 2}"#] {
        let res = client
            .post(format!("{}/orders", srv.base_url))
            .body(raw)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {raw:?}");
        assert_json(&res);
    }

    assert!(list_orders(&client, &srv.base_url).await.is_empty());
}

#[tokio::test]
async fn unsupported_verbs_are_method_not_allowed() {
    let srv = TestServer::menu().await;
    let client = reqwest::Client::new();

    let attempts = [
        client.post(format!("{}/pizzas", srv.base_url)),
        client.delete(format!("{}/pizzas", srv.base_url)),
        client.put(format!("{}/orders", srv.base_url)),
        client.delete(format!("{}/orders", srv.base_url)),
    ];
    for req in attempts {
        let res = req.send().await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_json(&res);
    }

    assert!(list_orders(&client, &srv.base_url).await.is_empty());
}

#[tokio::test]
async fn ledger_keeps_creation_order() {
    let srv = TestServer::menu().await;
    let client = reqwest::Client::new();

    for (item_id, quantity) in [(3, 1), (2, 4), (42, 1), (1, 5)] {
        post_order(&client, &srv.base_url, json!({"item_id": item_id, "quantity": quantity})).await;
    }

    let orders = list_orders(&client, &srv.base_url).await;
    assert_eq!(
        orders,
        vec![
            json!({"item_id": 3, "quantity": 1, "total": 10}),
            json!({"item_id": 2, "quantity": 4, "total": 44}),
            json!({"item_id": 1, "quantity": 5, "total": 60}),
        ]
    );
}

#[tokio::test]
async fn legacy_pizza_id_field_is_accepted() {
    let srv = TestServer::menu().await;
    let client = reqwest::Client::new();

    let res = post_order(&client, &srv.base_url, json!({"pizza_id": 2, "quantity": 3})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["total"], 33);
}

#[tokio::test]
async fn quantity_policy_controls_non_positive_orders() {
    let lenient = TestServer::menu().await;
    let client = reqwest::Client::new();
    let res = post_order(&client, &lenient.base_url, json!({"item_id": 1, "quantity": 0})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["total"], 0);

    let strict = TestServer::spawn(Catalog::default_menu(), QuantityPolicy::PositiveOnly).await;
    let res = post_order(&client, &strict.base_url, json!({"item_id": 1, "quantity": -1})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(list_orders(&client, &strict.base_url).await.is_empty());
}

#[tokio::test]
async fn custom_catalog_is_served_as_given() {
    let catalog =
        Catalog::new(vec![Item::new(10, "Calzone", 14), Item::new(4, "Marinara", 8)]).unwrap();
    let srv = TestServer::spawn(catalog, QuantityPolicy::AllowAny).await;
    let client = reqwest::Client::new();

    let pizzas: Vec<serde_json::Value> = client
        .get(format!("{}/pizzas", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<_> = pizzas.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![10, 4]);
}

#[tokio::test]
async fn concurrent_creates_are_all_recorded() {
    let srv = TestServer::menu().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..50i64 {
        let client = client.clone();
        let base_url = srv.base_url.clone();
        tasks.push(tokio::spawn(async move {
            let body = json!({"item_id": (i % 3) + 1, "quantity": 1});
            post_order(&client, &base_url, body).await.status()
        }));
    }
    for t in tasks {
        assert_eq!(t.await.unwrap(), StatusCode::CREATED);
    }

    let orders = list_orders(&client, &srv.base_url).await;
    assert_eq!(orders.len(), 50);
    let total: i64 = orders.iter().map(|o| o["total"].as_i64().unwrap()).sum();
    // 17 x Pepperoni, 17 x Capricciosa, 16 x Margherita
    assert_eq!(total, 17 * 12 + 17 * 11 + 16 * 10);
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let srv = TestServer::spawn(Catalog::empty(), QuantityPolicy::AllowAny).await;
    let res = reqwest::Client::new()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_json(&res);
}
