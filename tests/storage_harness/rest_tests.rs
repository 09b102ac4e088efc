//! REST integration test macro for store repository backends.
//!
//! The `store_rest_tests!` macro generates HTTP-level tests that drive a
//! backend through the full stack:
//! JSON → HTTP request → handler → StoreRepository → HTTP response → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$factory` must produce a fresh, empty `impl StoreRepository + 'static`.
/// Both fixtures are saved before every test.
///
/// # Generated Tests
///
/// ## Get
/// - `test_rest_get`: GET 200 + stored record
/// - `test_rest_get_malformed_id`: partial UUID → 400 even though a fixture starts with it
/// - `test_rest_get_unknown_id`: well-formed unknown UUID → 404
///
/// ## Search
/// - `test_rest_search_case_insensitive`: name and address substrings
/// - `test_rest_search_union`: name OR address
/// - `test_rest_search_no_match`: 404 with both parameters echoed
///
/// ## Create / Update
/// - `test_rest_create`: 201, Location, fresh id, retrievable
/// - `test_rest_update_partial`: PUT name only keeps address
/// - `test_rest_update_idempotent`: same PUT twice, same stored state
/// - `test_rest_update_unknown_id`: 404
#[macro_export]
macro_rules! store_rest_tests {
    ($factory:expr) => {
        mod store_rest_tests {
            use super::*;
            use acme::core::error::ErrorBody;
            use acme::entities::Store;
            use acme::server::ServerBuilder;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::json;

            async fn make_server() -> TestServer {
                let repository = $factory;
                seed_fixtures(&repository).await;
                let router = ServerBuilder::new()
                    .with_repository(repository)
                    .build()
                    .unwrap();
                TestServer::try_new(router).unwrap()
            }

            // ==============================================================
            // Get
            // ==============================================================

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;

                let response = server.get(&format!("/stores/{}", ARACAJU_ID)).await;
                response.assert_status(StatusCode::OK);

                let store: Store = response.json();
                assert_eq!(store, aracaju());
            }

            #[tokio::test]
            async fn test_rest_get_malformed_id() {
                let server = make_server().await;

                let response = server.get("/stores/00acc00e").await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: ErrorBody = response.json();
                assert_eq!(body.status, 400);
                assert_eq!(body.message, "id is not valid: 00acc00e");
            }

            #[tokio::test]
            async fn test_rest_get_unknown_id() {
                let server = make_server().await;

                let response = server.get(&format!("/stores/{}", UNKNOWN_ID)).await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: ErrorBody = response.json();
                assert_eq!(body.status, 404);
                assert_eq!(body.message, format!("no Store found for id {}", UNKNOWN_ID));
            }

            // ==============================================================
            // Search
            // ==============================================================

            #[tokio::test]
            async fn test_rest_search_case_insensitive() {
                let server = make_server().await;

                for query in ["name=acaj", "name=Aracaju", "address=entr", "address=CENTRO"] {
                    let response = server.get(&format!("/stores?{}", query)).await;
                    response.assert_status(StatusCode::OK);

                    let stores: Vec<Store> = response.json();
                    assert_eq!(stores, vec![aracaju()], "query {query}");
                }
            }

            #[tokio::test]
            async fn test_rest_search_union() {
                let server = make_server().await;

                let response = server
                    .get("/stores")
                    .add_query_param("name", "Vit")
                    .add_query_param("address", "Aracaju/SE")
                    .await;
                response.assert_status(StatusCode::OK);

                let stores: Vec<Store> = response.json();
                assert_eq!(stores, vec![aracaju(), vitoria()]);
            }

            #[tokio::test]
            async fn test_rest_search_no_match() {
                let server = make_server().await;

                let response = server.get("/stores?name=zzzzzzx6&address=nowhere").await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: ErrorBody = response.json();
                assert_eq!(
                    body.message,
                    "no Store found for parameters Name [zzzzzzx6] or Address [nowhere]"
                );
            }

            // ==============================================================
            // Create / Update
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server
                    .post("/stores")
                    .json(&json!({
                        "id": ARACAJU_ID,
                        "name": "Maceió",
                        "address": "Centro, Maceió/AL"
                    }))
                    .await;
                response.assert_status(StatusCode::CREATED);

                let created: Store = response.json();
                let id = created.id.expect("id assigned");
                assert_ne!(id, parse_uuid(ARACAJU_ID));
                assert_eq!(created.name, "Maceió");
                assert_eq!(
                    response.header("location"),
                    format!("/stores/{}", id).as_str()
                );

                let fetched: Store = server.get(&format!("/stores/{}", id)).await.json();
                assert_eq!(fetched, created);

                // The fixture the body pointed at is untouched
                let original: Store = server.get(&format!("/stores/{}", ARACAJU_ID)).await.json();
                assert_eq!(original, aracaju());
            }

            #[tokio::test]
            async fn test_rest_update_partial() {
                let server = make_server().await;

                let response = server
                    .put(&format!("/stores/{}", VITORIA_ID))
                    .json(&json!({ "name": "Vitória Shopping" }))
                    .await;
                response.assert_status(StatusCode::OK);

                let updated: Store = response.json();
                assert_eq!(updated.id, Some(parse_uuid(VITORIA_ID)));
                assert_eq!(updated.name, "Vitória Shopping");
                assert_eq!(updated.address, vitoria().address);

                let fetched: Store = server.get(&format!("/stores/{}", VITORIA_ID)).await.json();
                assert_eq!(fetched, updated);
            }

            #[tokio::test]
            async fn test_rest_update_idempotent() {
                let server = make_server().await;
                let patch = json!({ "name": "Aracaju Centro", "address": "" });

                let first: Store = server
                    .put(&format!("/stores/{}", ARACAJU_ID))
                    .json(&patch)
                    .await
                    .json();
                let second: Store = server
                    .put(&format!("/stores/{}", ARACAJU_ID))
                    .json(&patch)
                    .await
                    .json();

                assert_eq!(first, second);
                assert_eq!(second.address, "Centro, Aracaju/SE");
            }

            #[tokio::test]
            async fn test_rest_update_unknown_id() {
                let server = make_server().await;

                let response = server
                    .put(&format!("/stores/{}", UNKNOWN_ID))
                    .json(&json!({ "name": "Ghost" }))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: ErrorBody = response.json();
                assert_eq!(body.message, format!("no Store found for id {}", UNKNOWN_ID));
            }
        }
    };
}
