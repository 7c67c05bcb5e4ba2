//! Macro-generated test suite for `EmployeeRepository` contract validation.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_save_assigns_id`: insert populates a positive id
//! - `test_find_all`: two inserts, two rows, ascending ids
//! - `test_find_all_empty`: empty table yields an empty vec
//! - `test_find_by_id` / `test_find_by_id_absent`
//! - `test_update_replaces_columns`: save on a persisted id replaces fields
//! - `test_update_unknown_id`: save on an unknown id is `RowNotFound`
//! - `test_update_negative_id`: a negative id is never inserted
//! - `test_delete` / `test_delete_absent_is_noop`
//!
//! ## Lookups
//! - `test_find_by_email` / `test_find_by_email_absent`
//! - `test_find_by_name`: exact match on both names
//! - `test_find_by_name_requires_both`: partial matches are ignored
//! - `test_find_by_name_lowest_id_wins`: ties resolve to the lowest id
//!
//! ## Constraints
//! - `test_duplicate_email_insert`: unique index rejects the second insert
//! - `test_duplicate_email_update`: unique index rejects taking another row's email
//! - `test_concurrent_inserts`: parallel inserts get distinct ids

/// Generate a full `EmployeeRepository` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty repository. It is re-evaluated
/// for each test. For the concurrency test the repository must also be
/// `Clone + 'static`.
#[macro_export]
macro_rules! repository_contract_tests {
    ($factory:expr) => {
        mod repository_contract_tests {
            use super::*;
            use employees::core::{Employee, EmployeeRepository, StorageError};

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_save_assigns_id() {
                let repository = $factory;

                let saved = repository.save(ram()).await.unwrap();

                assert!(saved.id > 0);
                assert_eq!(saved.first_name, "Ram");
                assert_eq!(saved.last_name, "Kumar");
                assert_eq!(saved.email, "ram@gmail.com");
            }

            #[tokio::test]
            async fn test_find_all() {
                let repository = $factory;

                repository.save(ram()).await.unwrap();
                repository
                    .save(Employee::new("Shayam", "Kumar", "shayam@gmail.com"))
                    .await
                    .unwrap();

                let all = repository.find_all().await.unwrap();
                assert_eq!(all.len(), 2);
                assert!(all[0].id < all[1].id, "rows should be ordered by id");
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let repository = $factory;

                assert!(repository.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_find_by_id() {
                let repository = $factory;
                let saved = repository.save(ram()).await.unwrap();

                let found = repository.find_by_id(saved.id).await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_find_by_id_absent() {
                let repository = $factory;

                assert!(repository.find_by_id(999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_update_replaces_columns() {
                let repository = $factory;
                let saved = repository.save(ram()).await.unwrap();

                let mut stored = repository.find_by_id(saved.id).await.unwrap().unwrap();
                stored.email = "ramesh@gmail.com".to_string();
                stored.first_name = "Ramesh".to_string();
                let updated = repository.save(stored).await.unwrap();

                assert_eq!(updated.id, saved.id);
                assert_eq!(updated.email, "ramesh@gmail.com");
                assert_eq!(updated.first_name, "Ramesh");
                assert_eq!(updated.last_name, "Kumar");

                let reloaded = repository.find_by_id(saved.id).await.unwrap().unwrap();
                assert_eq!(reloaded, updated);
                assert_eq!(repository.find_all().await.unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_update_unknown_id() {
                let repository = $factory;

                let err = repository.save(ram().with_id(4242)).await.unwrap_err();
                assert!(matches!(err, StorageError::RowNotFound { id: 4242 }));
            }

            #[tokio::test]
            async fn test_update_negative_id() {
                let repository = $factory;

                let err = repository.save(ram().with_id(-5)).await.unwrap_err();

                assert!(matches!(err, StorageError::RowNotFound { id: -5 }));
                assert!(repository.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete() {
                let repository = $factory;
                let saved = repository.save(ram()).await.unwrap();

                repository.delete_by_id(saved.id).await.unwrap();

                assert!(repository.find_by_id(saved.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_absent_is_noop() {
                let repository = $factory;
                repository.save(ram()).await.unwrap();

                repository.delete_by_id(999).await.unwrap();

                assert_eq!(repository.find_all().await.unwrap().len(), 1);
            }

            // ==================================================================
            // Lookups
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_email() {
                let repository = $factory;
                let saved = repository.save(ram()).await.unwrap();

                let found = repository.find_by_email("ram@gmail.com").await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_find_by_email_absent() {
                let repository = $factory;
                repository.save(ram()).await.unwrap();

                assert!(repository
                    .find_by_email("RAM@gmail.com")
                    .await
                    .unwrap()
                    .is_none());
            }

            #[tokio::test]
            async fn test_find_by_name() {
                let repository = $factory;
                let saved = repository.save(ram()).await.unwrap();

                let found = repository.find_by_name("Ram", "Kumar").await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_find_by_name_requires_both() {
                let repository = $factory;
                repository.save(ram()).await.unwrap();

                assert!(repository.find_by_name("Ram", "Sharma").await.unwrap().is_none());
                assert!(repository.find_by_name("Shayam", "Kumar").await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_find_by_name_lowest_id_wins() {
                let repository = $factory;
                let first = repository.save(ram()).await.unwrap();
                repository
                    .save(Employee::new("Ram", "Kumar", "ram.kumar@gmail.com"))
                    .await
                    .unwrap();

                let found = repository.find_by_name("Ram", "Kumar").await.unwrap().unwrap();
                assert_eq!(found.id, first.id);
            }

            // ==================================================================
            // Constraints
            // ==================================================================

            #[tokio::test]
            async fn test_duplicate_email_insert() {
                let repository = $factory;
                repository.save(ram()).await.unwrap();

                let err = repository
                    .save(Employee::new("Shayam", "Kumar", "ram@gmail.com"))
                    .await
                    .unwrap_err();

                assert!(matches!(err, StorageError::UniqueViolation { .. }));
                assert_eq!(repository.find_all().await.unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_duplicate_email_update() {
                let repository = $factory;
                repository.save(ram()).await.unwrap();
                let mut other = repository
                    .save(Employee::new("Shayam", "Kumar", "shayam@gmail.com"))
                    .await
                    .unwrap();

                other.email = "ram@gmail.com".to_string();
                let err = repository.save(other.clone()).await.unwrap_err();

                assert!(matches!(err, StorageError::UniqueViolation { .. }));
                let reloaded = repository.find_by_id(other.id).await.unwrap().unwrap();
                assert_eq!(reloaded.email, "shayam@gmail.com");
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let repository = $factory;
                let mut handles = Vec::new();

                for employee in sample_batch(10) {
                    let repository = repository.clone();
                    handles.push(tokio::spawn(async move {
                        repository.save(employee).await.unwrap()
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap().id);
                }
                ids.sort();
                ids.dedup();

                assert_eq!(ids.len(), 10, "every insert should get its own id");
                assert_eq!(repository.find_all().await.unwrap().len(), 10);
            }
        }
    };
}
