//! Database configuration module.
//!
//! This module handles connecting to the optional target database and creating
//! the seeded tables. It uses `SeaORM`'s `Schema::create_table_from_entity`
//! so the schema always matches the entity definitions, both for a live
//! connection and for the `CREATE TABLE` preamble of the SQL script.

use crate::config::OutputConfig;
use crate::entities::{
    Customer, Employee, InventoryItem, MenuItem, Order, OrderItem, RecipeIngredient,
};
use crate::errors::Result;
use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema};

/// Gets the database URL to load into, if any.
///
/// `DATABASE_URL` in the environment takes precedence over
/// `output.database_url` in config.toml.
#[must_use]
pub fn get_database_url(output: &OutputConfig) -> Option<String> {
    std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| output.database_url.clone())
}

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Builds `CREATE TABLE IF NOT EXISTS` statements for every seeded table,
/// parents before children so foreign keys resolve.
#[must_use]
pub fn schema_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    let mut statements = vec![
        schema.create_table_from_entity(MenuItem),
        schema.create_table_from_entity(InventoryItem),
        schema.create_table_from_entity(RecipeIngredient),
        schema.create_table_from_entity(Customer),
        schema.create_table_from_entity(Employee),
        schema.create_table_from_entity(Order),
        schema.create_table_from_entity(OrderItem),
    ];
    for statement in &mut statements {
        statement.if_not_exists();
    }
    statements
}

/// Creates all seeded tables on the given connection.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    for statement in schema_statements(builder) {
        db.execute(builder.build(&statement)).await?;
    }
    Ok(())
}
