use std::str::FromStr;

use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row as _, Sqlite};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Collection, Row};

mod schema;

#[cfg(test)]
mod tests;

/// Handle to the record store.
///
/// The store is a single SQLite file holding the four collections. It is
/// opened once at startup and closed on normal exit.
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open or create the store at `url` and ensure all collection
    /// schemas exist. Repeated invocations against the same store are
    /// idempotent.
    pub async fn connect(url: &str) -> ServiceResult<Database> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Single user, single long-lived connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let database = Database::from_pool(pool).await?;
        info!("opened record store at {url}");
        Ok(database)
    }

    /// Wrap an existing pool and ensure all collection schemas exist.
    pub async fn from_pool(pool: Pool<Sqlite>) -> ServiceResult<Database> {
        for statement in schema::CREATE_TABLES {
            sqlx::query(statement).execute(&pool).await?;
        }
        debug!("record store schema is up to date");

        Ok(Database { pool })
    }

    /// Insert a new row with the given ordered values into the collection
    /// and return the assigned surrogate id.
    ///
    /// Expects exactly one value per declared field. Values are stored
    /// verbatim, without validation or coercion.
    pub async fn append(&self, collection: Collection, values: &[String]) -> ServiceResult<i64> {
        let fields = collection.fields();
        if values.len() != fields.len() {
            return Err(ServiceError::Storage(
                "Database error",
                format!(
                    "{} takes {} values, got {}",
                    collection.name(),
                    fields.len(),
                    values.len()
                ),
            ));
        }

        let mut query = sqlx::query(insert_sql(collection));
        for value in values {
            query = query.bind(value.as_str());
        }

        let result = query.execute(&self.pool).await?;
        let id = result.last_insert_rowid();
        info!("stored {} record #{id}", collection.name());

        Ok(id)
    }

    /// Return all rows of the collection in insertion order, ascending
    /// surrogate id.
    pub async fn fetch_all(&self, collection: Collection) -> ServiceResult<Vec<Row>> {
        let rows = sqlx::query(select_sql(collection))
            .fetch_all(&self.pool)
            .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id")?;
            let mut values = Vec::with_capacity(collection.fields().len());
            for field in collection.fields() {
                values.push(row.try_get::<String, _>(field.column)?);
            }
            result.push(Row { id, values });
        }
        debug!("fetched {} {} records", result.len(), collection.name());

        Ok(result)
    }

    /// Close the store. Called once on normal process exit.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("record store closed");
    }
}

fn insert_sql(collection: Collection) -> &'static str {
    match collection {
        Collection::Customers => schema::INSERT_CUSTOMER,
        Collection::Orders => schema::INSERT_ORDER,
        Collection::Stock => schema::INSERT_STOCK,
        Collection::Suppliers => schema::INSERT_SUPPLIER,
    }
}

fn select_sql(collection: Collection) -> &'static str {
    match collection {
        Collection::Customers => schema::SELECT_CUSTOMERS,
        Collection::Orders => schema::SELECT_ORDERS,
        Collection::Stock => schema::SELECT_STOCK,
        Collection::Suppliers => schema::SELECT_SUPPLIERS,
    }
}
