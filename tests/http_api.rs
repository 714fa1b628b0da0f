use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use shopfront::catalog::Properties;
use shopfront::{routes, Server};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(props: Properties) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            Server::from_listener(listener)
                .serve(routes::router(), Arc::new(props))
                .await
                .unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn catalog() -> Properties {
    Properties::from_toml_str(
        r#"
        all.item0ImageUrl = "http://x/all.png"
        all.item0Description = "Everything"
        jewelry.item0ImageUrl = "http://x/a.png"
        jewelry.item0Description = "Ring"
        shoes.item0ImageUrl = "http://x/boot.png"
        shoes.item0Description = "Boot"
        shoes.item8Description = "Last boot"
        "#,
    )
    .unwrap()
}

async fn get_json(client: &reqwest::Client, url: String) -> Vec<Value> {
    let res = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn full_page_load_returns_the_shell() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-view"], "fullpageloader");
    assert!(res.headers()["content-type"].to_str().unwrap().starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains(r#"data-page-to-load="all.html""#));
    assert!(body.contains("<title>All</title>"));
    assert!(body.contains("<p>Everything</p>"));
}

#[tokio::test]
async fn pjax_load_returns_the_fragment() {
    let srv = TestServer::spawn(catalog()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/jewelry", srv.base_url))
        .header("X-PJAX", "true")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-view"], "jewelry");

    let body = res.text().await.unwrap();
    assert!(body.starts_with("<section"));
    assert_eq!(body.matches("<article").count(), 9);
    assert!(body.contains("<p>Ring</p>"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn every_category_page_is_served() {
    let srv = TestServer::spawn(catalog()).await;
    let client = reqwest::Client::new();

    for (path, title) in [("/", "All"), ("/jewelry", "Jewelry"), ("/shoes", "Shoes"), ("/clothing", "Clothing")] {
        let res = client.get(format!("{}{}", srv.base_url, path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let body = res.text().await.unwrap();
        assert!(body.contains(&format!("<title>{title}</title>")), "{path}");
    }
}

#[tokio::test]
async fn cards_return_nine_items_with_nulls_for_missing_keys() {
    let srv = TestServer::spawn(catalog()).await;
    let client = reqwest::Client::new();

    let items = get_json(&client, format!("{}/cards/shoes", srv.base_url)).await;
    assert_eq!(items.len(), 9);
    assert_eq!(items[0], json!({ "imageUrl": "http://x/boot.png", "itemDescription": "Boot" }));
    assert_eq!(items[1], json!({ "imageUrl": null, "itemDescription": null }));
    assert_eq!(items[8], json!({ "imageUrl": null, "itemDescription": "Last boot" }));

    let clothing = get_json(&client, format!("{}/cards/clothing", srv.base_url)).await;
    assert_eq!(clothing.len(), 9);
    assert!(clothing.iter().all(|item| item["imageUrl"].is_null()));
}

#[tokio::test]
async fn unknown_card_type_matches_shoes() {
    let srv = TestServer::spawn(catalog()).await;
    let client = reqwest::Client::new();

    let unknown = get_json(&client, format!("{}/cards/unknown", srv.base_url)).await;
    let shoes = get_json(&client, format!("{}/cards/shoes", srv.base_url)).await;
    assert_eq!(unknown, shoes);
}

#[tokio::test]
async fn cards_are_the_same_on_every_call() {
    let srv = TestServer::spawn(catalog()).await;
    let client = reqwest::Client::new();

    let first = get_json(&client, format!("{}/cards/jewelry", srv.base_url)).await;
    let second = get_json(&client, format!("{}/cards/jewelry", srv.base_url)).await;
    assert_eq!(first, second);
    assert_eq!(first[0]["itemDescription"], "Ring");
}

#[tokio::test]
async fn cards_refuse_html_only_clients() {
    let srv = TestServer::spawn(catalog()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/cards/shoes", srv.base_url))
        .header("accept", "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn unknown_routes_and_methods_are_not_found() {
    let srv = TestServer::spawn(catalog()).await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/hats", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.post(format!("{}/shoes", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_checks_answer() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/healthz", srv.base_url)).await.unwrap();
    assert_eq!(res.text().await.unwrap(), "ok");

    let res = reqwest::get(format!("{}/readyz", srv.base_url)).await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ready", "properties": 7 }));
}
