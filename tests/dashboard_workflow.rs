use std::sync::Arc;

use feed_quote_tracker::config::DashboardConfig;
use feed_quote_tracker::routes::build_app;
use feed_quote_tracker::FileStore;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn post(&self, path: &str, json: Value) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(&format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
    }

    async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(&format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .delete(&format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}

/// Serve the real application from a scratch data directory on a free port
async fn spawn_server() -> (tempfile::TempDir, TestClient) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(
        dir.path().join("establishments.json"),
        dir.path().join("quotations.json"),
    );
    let dashboard = DashboardConfig {
        enabled: true,
        static_dir: format!("{}/public", env!("CARGO_MANIFEST_DIR")),
    };
    let app = build_app(Arc::new(store), &dashboard);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (dir, TestClient::new(format!("http://{}", address)))
}

#[tokio::test]
async fn test_establishment_delete_does_not_cascade() {
    let (dir, client) = spawn_server().await;

    println!("1. Registering establishment...");
    let response = client
        .post("/establishments", json!({"name": "FarmCo"}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let establishment: Value = response.json().await.unwrap();
    assert_eq!(establishment["id"], 1);
    assert_eq!(establishment["name"], "FarmCo");

    println!("2. Recording quotation...");
    let response = client
        .post(
            "/quotations",
            json!({
                "feedName": "Oats",
                "price": 12.5,
                "date": "2024-03-01",
                "establishmentName": "FarmCo"
            }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let quotation: Value = response.json().await.unwrap();
    assert_eq!(quotation["id"], 1);

    let listed: Vec<Value> = client.get("/quotations").await.unwrap().json().await.unwrap();
    assert_eq!(listed, vec![quotation.clone()]);

    println!("3. Removing establishment...");
    let response = client.delete("/establishments/1").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].is_string());

    println!("4. Quotation still names the removed establishment...");
    let listed: Vec<Value> = client.get("/quotations").await.unwrap().json().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["establishmentName"], "FarmCo");

    let establishments: Vec<Value> = client
        .get("/establishments")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(establishments.is_empty());

    // Both collections were persisted as pretty-printed arrays
    let on_disk = std::fs::read_to_string(dir.path().join("quotations.json")).unwrap();
    assert!(on_disk.starts_with("[\n  {"));
    assert!(on_disk.contains("\"establishmentName\": \"FarmCo\""));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("establishments.json")).unwrap(),
        "[]"
    );
}

#[tokio::test]
async fn test_rejections_carry_a_message() {
    let (_dir, client) = spawn_server().await;

    client
        .post("/establishments", json!({"name": "FarmCo"}))
        .await
        .unwrap();

    let cases = [
        ("/establishments", json!({"name": ""}), StatusCode::BAD_REQUEST),
        ("/establishments", json!({"name": "FARMCO"}), StatusCode::CONFLICT),
        (
            "/quotations",
            json!({
                "feedName": "Oats",
                "price": 0,
                "date": "2024-03-01",
                "establishmentName": "FarmCo"
            }),
            StatusCode::BAD_REQUEST,
        ),
        (
            "/quotations",
            json!({"feedName": "Oats", "price": 3.5}),
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (path, body, expected) in cases {
        let response = client.post(path, body.clone()).await.unwrap();
        assert_eq!(response.status(), expected, "{} {}", path, body);
        let error: Value = response.json().await.unwrap();
        assert!(error["message"].is_string(), "{} {}", path, body);
    }

    let response = client.delete("/quotations/1").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_and_summary_are_served() {
    let (_dir, client) = spawn_server().await;

    let response = client.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = response.text().await.unwrap();
    assert!(page.contains("priceByDateChart"));
    assert!(page.contains("priceByFeedChart"));

    for (feed, price, date) in [
        ("Corn", 10.0, "2024-01-01"),
        ("Wheat", 4.0, "2024-01-02"),
        ("Corn", 20.0, "2024-01-01"),
    ] {
        client
            .post(
                "/quotations",
                json!({
                    "feedName": feed,
                    "price": price,
                    "date": date,
                    "establishmentName": "FarmCo"
                }),
            )
            .await
            .unwrap();
    }

    let summary: Value = client
        .get("/quotations/summary")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        summary["byDate"],
        json!([
            {"label": "2024-01-01", "averagePrice": 15.0},
            {"label": "2024-01-02", "averagePrice": 4.0}
        ])
    );
    assert_eq!(summary["byFeed"].as_array().unwrap().len(), 2);
}
