//! Macro-generated test suite for `StoreRepository` contract validation.
//!
//! # Generated Tests
//!
//! - `test_save_without_id_assigns_one`: fresh UUID, record retrievable
//! - `test_save_with_id_upserts`: same id twice keeps one record, last write wins
//! - `test_find_missing`: unknown id returns `None`
//! - `test_filter_by_name` / `test_filter_by_address`: case-insensitive substring
//! - `test_filter_name_or_address`: union of both matches
//! - `test_filter_wildcards_are_literal`: `%` and `_` match themselves only
//! - `test_filter_order`: results come back in insertion order
//! - `test_concurrent_saves`: parallel inserts from spawned tasks

/// Generate a full `StoreRepository` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty repository. It is re-evaluated
/// for each test. For the concurrent test the repository must also be
/// `Clone + 'static`.
#[macro_export]
macro_rules! store_repository_tests {
    ($factory:expr) => {
        mod store_repository_contract_tests {
            use super::*;
            use acme::core::query::StoreFilter;
            use acme::core::repository::StoreRepository;
            use acme::entities::Store;
            use uuid::Uuid;

            fn name(needle: &str) -> StoreFilter {
                StoreFilter::Name(needle.to_string())
            }

            fn address(needle: &str) -> StoreFilter {
                StoreFilter::Address(needle.to_string())
            }

            #[tokio::test]
            async fn test_save_without_id_assigns_one() {
                let repo = $factory;

                let saved = repo
                    .save(Store::new("Maceió", "Centro, Maceió/AL"))
                    .await
                    .unwrap();
                let id = saved.id.expect("repository assigns an id");

                let found = repo.find_by_id(&id).await.unwrap().unwrap();
                assert_eq!(found, saved);
            }

            #[tokio::test]
            async fn test_save_with_id_upserts() {
                let repo = $factory;
                let id = parse_uuid(ARACAJU_ID);

                repo.save(aracaju()).await.unwrap();
                let updated = repo
                    .save(Store::with_id(id, "Aracaju Sul", "Centro, Aracaju/SE"))
                    .await
                    .unwrap();
                assert_eq!(updated.id, Some(id));

                let found = repo.find_by_id(&id).await.unwrap().unwrap();
                assert_eq!(found.name, "Aracaju Sul");
                assert_eq!(repo.find_by_filter(&name("aracaju")).await.unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_find_missing() {
                let repo = $factory;
                seed_fixtures(&repo).await;
                assert!(repo.find_by_id(&parse_uuid(UNKNOWN_ID)).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_filter_by_name() {
                let repo = $factory;
                seed_fixtures(&repo).await;

                for needle in ["acaj", "Aracaju", "ARACAJU"] {
                    let found = repo.find_by_filter(&name(needle)).await.unwrap();
                    assert_eq!(found, vec![aracaju()], "needle {needle}");
                }
                // Name filter ignores the address column
                assert!(repo.find_by_filter(&name("Centro")).await.unwrap().is_empty());
                assert!(repo.find_by_filter(&name("zzzzzzx6")).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_filter_by_address() {
                let repo = $factory;
                seed_fixtures(&repo).await;

                let found = repo.find_by_filter(&address("entr")).await.unwrap();
                assert_eq!(found, vec![aracaju()]);

                let found = repo.find_by_filter(&address("praia do canto")).await.unwrap();
                assert_eq!(found, vec![vitoria()]);
            }

            #[tokio::test]
            async fn test_filter_name_or_address() {
                let repo = $factory;
                seed_fixtures(&repo).await;

                let found = repo
                    .find_by_filter(&StoreFilter::NameOrAddress {
                        name: "vit".to_string(),
                        address: "centro".to_string(),
                    })
                    .await
                    .unwrap();
                assert_eq!(found, vec![aracaju(), vitoria()]);
            }

            #[tokio::test]
            async fn test_filter_wildcards_are_literal() {
                let repo = $factory;
                seed_fixtures(&repo).await;
                repo.save(Store::new("Outlet 50%", "Rua_Larga 10")).await.unwrap();

                assert!(repo.find_by_filter(&name("%")).await.unwrap().len() == 1);
                assert!(repo.find_by_filter(&address("_")).await.unwrap().len() == 1);
                assert!(repo.find_by_filter(&name("a_a")).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_filter_order() {
                let repo = $factory;
                let first = repo.save(Store::new("Loja B", "Centro")).await.unwrap();
                let second = repo.save(Store::new("Loja A", "Centro")).await.unwrap();
                let third = repo.save(Store::new("Loja C", "Centro")).await.unwrap();

                let found = repo.find_by_filter(&address("centro")).await.unwrap();
                let ids: Vec<_> = found.into_iter().map(|s| s.id).collect();
                assert_eq!(ids, vec![first.id, second.id, third.id]);
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let repo = $factory;

                let mut handles = Vec::new();
                for i in 0..10 {
                    let repo = repo.clone();
                    handles.push(tokio::spawn(async move {
                        repo.save(Store::new(format!("Loja {i}"), "Concurrent street"))
                            .await
                            .unwrap()
                    }));
                }

                let mut ids: Vec<Uuid> = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap().id.unwrap());
                }
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 10);

                let found = repo.find_by_filter(&address("concurrent")).await.unwrap();
                assert_eq!(found.len(), 10);
            }
        }
    };
}
