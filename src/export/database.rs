//! Database sink - loads a dataset into a live connection.
//!
//! Tables are created if missing, then every row is inserted inside one
//! transaction in chunks. Inventory is stored at its closing quantities, the
//! state a running system would be in after the generated orders.

use crate::{
    config::database::create_tables,
    dataset::Dataset,
    entities::{Customer, Employee, InventoryItem, MenuItem, Order, OrderItem, RecipeIngredient},
    errors::Result,
};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, IntoActiveModel,
    TransactionTrait,
};
use tracing::{debug, info};

const CHUNK_SIZE: usize = 100;

async fn insert_chunked<E, C>(db: &C, rows: &[E::Model]) -> Result<()>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    C: ConnectionTrait,
{
    for chunk in rows.chunks(CHUNK_SIZE) {
        E::insert_many(chunk.iter().cloned().map(IntoActiveModel::into_active_model))
            .exec_without_returning(db)
            .await?;
    }
    debug!("Inserted {} rows into {}", rows.len(), E::default().table_name());
    Ok(())
}

/// Creates the tables and inserts the whole dataset.
///
/// # Errors
/// Returns an error if a statement fails; the transaction is rolled back and
/// no rows are kept.
pub async fn load_dataset(db: &DatabaseConnection, dataset: &Dataset) -> Result<()> {
    create_tables(db).await?;

    let txn = db.begin().await?;
    insert_chunked::<MenuItem, _>(&txn, &dataset.menu_items).await?;
    insert_chunked::<InventoryItem, _>(&txn, &dataset.closing_inventory).await?;
    insert_chunked::<RecipeIngredient, _>(&txn, &dataset.recipes).await?;
    insert_chunked::<Customer, _>(&txn, &dataset.customers).await?;
    insert_chunked::<Employee, _>(&txn, &dataset.employees).await?;
    insert_chunked::<Order, _>(&txn, &dataset.orders).await?;
    insert_chunked::<OrderItem, _>(&txn, &dataset.order_items).await?;
    txn.commit().await?;

    info!(
        "Loaded {} orders and {} order lines into the database",
        dataset.orders.len(),
        dataset.order_items.len()
    );
    Ok(())
}
