use std::sync::Arc;

use anyhow::Context;
use sea_orm::{DatabaseBackend, DatabaseConnection, QueryResult, Statement, Value};
use typed_builder::TypedBuilder;

#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(url)
            .await
            .context("Could not connect to database")?;
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

/// Schema-qualified names of the tables the portal reads and writes.
#[derive(Clone, Debug)]
pub struct StoreTables {
    pub requests: String,
    pub companies: String,
}

#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    pub tables: StoreTables,
}

impl OrmRepo {
    pub fn statement(sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
    }
}

/// Reads column `column` of a raw query row.
pub fn column<T: sea_orm::TryGetable>(row: &QueryResult, column: &str) -> anyhow::Result<T> {
    row.try_get::<T>("", column).with_context(|| format!("Cannot read column {column}"))
}
