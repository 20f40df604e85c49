//! Integration tests for the warframe.market REST API client.
//!
//! Each test runs the real reqwest gateway against a local `wiremock` server.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use warframe_market::api::*;
use warframe_market::shared::{Language, Platform};

async fn client_for(server: &MockServer) -> WarframeMarketClient {
    WarframeMarketClient::builder()
        .base_url(server.uri())
        .timeout_secs(5)
        .build()
        .unwrap()
}

fn item_full(url_name: &str, set_root: bool) -> Value {
    json!({
        "id": format!("id_{}", url_name),
        "url_name": url_name,
        "icon": format!("items/images/en/{}.png", url_name),
        "thumb": format!("items/images/en/thumbs/{}.128x128.png", url_name),
        "tags": ["prime", "warframe"],
        "set_root": set_root,
        "trading_tax": 2000,
        "en": {"item_name": url_name, "description": null, "wiki_link": null, "drop": []}
    })
}

fn order_row(id: &str, platinum: u32, order_type: &str) -> Value {
    json!({
        "id": id,
        "platinum": platinum,
        "quantity": 2,
        "order_type": order_type,
        "platform": "pc",
        "region": "en",
        "visible": true,
        "creation_date": "2023-05-01T12:00:00.000+00:00",
        "last_update": "2023-05-02T12:00:00.000+00:00",
        "user": {
            "id": "user_1",
            "ingame_name": "Tenno",
            "status": "online",
            "region": "en",
            "reputation": 12,
            "avatar": null,
            "last_seen": "2023-05-02T12:00:00.000+00:00"
        }
    })
}

// =============================================================================
// Items
// =============================================================================

mod items {
    use super::*;

    #[tokio::test]
    async fn test_get_items_sends_language_and_json_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("Language", "ko"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payload": {"items": [
                    {"id": "1", "url_name": "axi_a1_relic", "thumb": "t1", "item_name": "Axi A1 Relic"},
                    {"id": "2", "url_name": "lex_prime_set", "thumb": "t2", "item_name": "Lex Prime Set"}
                ]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let items = client.get_items(Some(Language::Korean)).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].url_name, "axi_a1_relic");
        assert_eq!(items[1].item_name, "Lex Prime Set");
    }

    #[tokio::test]
    async fn test_get_item_slugifies_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/mirage_prime_systems"))
            .and(header("Platform", "ps4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payload": {"item": {"id": "x", "items_in_set": [
                    item_full("mirage_prime_set", true),
                    item_full("mirage_prime_systems", false)
                ]}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let set = client
            .get_item("Mirage Prime Systems", Some(Platform::Ps4))
            .await
            .unwrap();

        assert_eq!(set.len(), 2);
        assert!(set[0].set_root);
        assert_eq!(set[1].url_name, "mirage_prime_systems");
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/no_such_item"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_item("No Such Item", None).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }
}

// =============================================================================
// Orders
// =============================================================================

mod orders {
    use super::*;

    #[tokio::test]
    async fn test_get_orders_with_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/example_item/orders"))
            .and(query_param("include", "item"))
            .and(header("Platform", "pc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payload": {"orders": [
                    order_row("o1", 20, "sell"),
                    order_row("o2", 18, "buy")
                ]},
                "include": {"item": {"id": "x", "items_in_set": [
                    item_full("example_item_set", true),
                    item_full("example_item", false),
                    item_full("example_item_blueprint", false)
                ]}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.get_orders("example_item", true, None).await.unwrap();

        let (orders, items) = (*result).clone().into_parts();
        let items = items.expect("include=item returns items");
        assert_eq!(orders.len(), 2);
        assert_eq!(items.len(), 3);
        assert!(orders[0].is_sell());
        assert!(orders[1].is_buy());
        assert_eq!(items[2].url_name, "example_item_blueprint");
    }

    #[tokio::test]
    async fn test_get_orders_is_memoized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/example_item/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payload": {"orders": [order_row("o1", 20, "sell")]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let first = client.get_orders("example_item", false, None).await.unwrap();
        let second = client
            .get_orders("example_item", false, Some(Platform::Pc))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(second.items().is_none());
    }

    #[tokio::test]
    async fn test_dot_only_names_keep_the_item_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.get_orders(".", false, None).await.unwrap_err().is_not_found());
        assert!(client.get_orders("..", false, None).await.unwrap_err().is_not_found());
        assert!(client.get_item("..", None).await.unwrap_err().is_not_found());

        let paths: Vec<String> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect();
        assert_eq!(
            paths,
            [
                "/items/%252E/orders",
                "/items/%252E%252E/orders",
                "/items/%252E%252E",
            ]
        );
    }

    #[tokio::test]
    async fn test_server_error_is_not_memoized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/example_item/orders"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/items/example_item/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payload": {"orders": [order_row("o1", 20, "sell")]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        match client.get_orders("example_item", false, None).await {
            Err(ApiError::Transport(e)) => {
                assert_eq!(e.status, 503);
                assert_eq!(e.kind, StatusKind::ServerError);
            }
            other => panic!("expected transport error, got {other:?}"),
        }

        let orders = client.get_orders("example_item", false, None).await.unwrap();
        assert_eq!(orders.primary().len(), 1);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_orders("example_item", true, None).await.unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/example_item/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_orders("example_item", false, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}

// =============================================================================
// Drop tables and lifecycle
// =============================================================================

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn test_droptable_never_hits_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .get_droptable("Mirage Prime Systems", true, None)
            .await
            .unwrap_err();
        match err {
            ApiError::Unavailable { endpoint } => {
                assert_eq!(endpoint, "/items/mirage_prime_systems/droptables?include=item")
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_closed_client_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payload": {"items": []}
            })))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.close().await;

        assert!(client.is_closed().await);
        assert!(matches!(client.get_items(None).await, Err(ApiError::Closed)));
        assert!(matches!(
            client.get_orders("example_item", true, None).await,
            Err(ApiError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_builder_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("x-client", "integration-test"))
            .and(header("Language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payload": {"items": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = WarframeMarketClient::builder()
            .base_url(format!("{}/", server.uri()))
            .header("X-Client", "integration-test")
            .header("Language", "de")
            .build()
            .unwrap();

        let items = client.get_items(None).await.unwrap();
        assert!(items.is_empty());
    }
}
