use sqlx::SqlitePool;

use crate::error::ServiceError;
use crate::models::{Collection, Row};

use super::Database;

fn values(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}

#[sqlx::test]
async fn test_customer_append_and_fetch(pool: SqlitePool) {
    let db = Database::from_pool(pool).await.unwrap();

    let jane = values(&[
        "C1", "Jane", "Doe", "jane@x.com", "555-0100", "Main St", "12", "AB12CD", "Kent",
        "London",
    ]);
    let id = db.append(Collection::Customers, &jane).await.unwrap();
    assert_eq!(id, 1);

    let rows = db.fetch_all(Collection::Customers).await.unwrap();
    assert_eq!(rows, vec![Row { id: 1, values: jane }]);
}

#[sqlx::test]
async fn test_stock_rows_keep_append_order(pool: SqlitePool) {
    let db = Database::from_pool(pool).await.unwrap();

    let first = values(&["P1", "Flour", "40", "2024-01-05", "1.20", "Low"]);
    let second = values(&["P2", "Sugar", "15", "2024-01-06", "0.80", "Critical"]);

    assert_eq!(db.append(Collection::Stock, &first).await.unwrap(), 1);
    assert_eq!(db.append(Collection::Stock, &second).await.unwrap(), 2);

    let rows = db.fetch_all(Collection::Stock).await.unwrap();
    assert_eq!(
        rows,
        vec![
            Row { id: 1, values: first },
            Row { id: 2, values: second },
        ]
    );
}

#[sqlx::test]
async fn test_every_collection_round_trips(pool: SqlitePool) {
    let db = Database::from_pool(pool).await.unwrap();

    for collection in Collection::ALL {
        let entries: Vec<String> = collection
            .fields()
            .iter()
            .map(|field| format!("{}-1", field.column))
            .collect();

        let id = db.append(collection, &entries).await.unwrap();
        assert_eq!(id, 1, "first id in {}", collection.name());

        let rows = db.fetch_all(collection).await.unwrap();
        assert_eq!(rows, vec![Row { id: 1, values: entries }]);
    }
}

#[sqlx::test]
async fn test_ids_count_per_collection(pool: SqlitePool) {
    let db = Database::from_pool(pool).await.unwrap();

    let customer = values(&[
        "C1", "Jane", "Doe", "jane@x.com", "555-0100", "Main St", "12", "AB12CD", "Kent",
        "London",
    ]);
    let order = values(&["O1", "P1", "C1", "2", "9.99", "1", "morning"]);

    assert_eq!(db.append(Collection::Customers, &customer).await.unwrap(), 1);
    assert_eq!(db.append(Collection::Orders, &order).await.unwrap(), 1);
    assert_eq!(db.append(Collection::Orders, &order).await.unwrap(), 2);
}

#[sqlx::test]
async fn test_fresh_store_is_empty(pool: SqlitePool) {
    let db = Database::from_pool(pool).await.unwrap();

    for collection in Collection::ALL {
        assert_eq!(db.fetch_all(collection).await.unwrap(), vec![]);
    }
}

#[sqlx::test]
async fn test_blank_values_are_stored_verbatim(pool: SqlitePool) {
    let db = Database::from_pool(pool).await.unwrap();

    let entries = values(&["", "", " padded ", "twelve", "", "", ""]);
    db.append(Collection::Orders, &entries).await.unwrap();

    let rows = db.fetch_all(Collection::Orders).await.unwrap();
    assert_eq!(rows, vec![Row { id: 1, values: entries }]);
}

#[sqlx::test]
async fn test_append_rejects_wrong_value_count(pool: SqlitePool) {
    let db = Database::from_pool(pool).await.unwrap();

    let too_short = values(&["C1", "Jane", "Doe"]);
    let result = db.append(Collection::Customers, &too_short).await;
    assert!(matches!(result, Err(ServiceError::Storage(_, _))));

    assert_eq!(db.fetch_all(Collection::Customers).await.unwrap(), vec![]);
}

#[tokio::test]
async fn test_reopen_preserves_records_and_ids() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("system.db").display());

    let entries = values(&["P1", "Flour", "40", "2024-01-05", "1.20", "Low"]);

    let db = Database::connect(&url).await.unwrap();
    assert_eq!(db.append(Collection::Stock, &entries).await.unwrap(), 1);
    db.close().await;

    let db = Database::connect(&url).await.unwrap();
    let rows = db.fetch_all(Collection::Stock).await.unwrap();
    assert_eq!(rows, vec![Row { id: 1, values: entries.clone() }]);
    assert_eq!(db.append(Collection::Stock, &entries).await.unwrap(), 2);
    db.close().await;
}
