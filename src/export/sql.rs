//! SQL serializer - a single seed script of inserts and stock updates.
//!
//! The script inserts inventory at its opening stock and replays consumption
//! as `UPDATE inventory SET quantity = quantity - n` statements placed right
//! after the lines of the order that caused them, so running it top to
//! bottom ends at the same closing stock the CSV export shows.

use crate::{
    config::database::schema_statements,
    core::inventory::StockMovement,
    dataset::Dataset,
    entities::{
        Customer, Employee, InventoryItem, InventoryItemColumn, MenuItem, Order, OrderItem,
        RecipeIngredient,
    },
    errors::Result,
    export::{Exporter, write_atomically},
};
use sea_orm::{
    ColumnTrait, DbBackend, EntityName, EntityTrait, Iterable, ModelTrait, QueryFilter, QueryTrait,
    sea_query::{Expr, Query, SimpleExpr},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// File name of the script inside the output directory.
pub const SCRIPT_NAME: &str = "seed_data.sql";

/// Renders one `INSERT` statement for `row`, values inlined.
///
/// # Errors
/// Returns an error if the column and value counts disagree.
pub fn insert_statement<E>(backend: DbBackend, row: &E::Model) -> Result<String>
where
    E: EntityTrait,
{
    let mut insert = Query::insert();
    insert
        .into_table(E::default().table_ref())
        .columns(E::Column::iter())
        .values(E::Column::iter().map(|column| SimpleExpr::from(row.get(column))))?;
    Ok(backend.build(&insert).to_string())
}

/// Renders the stock decrement of one movement.
#[must_use]
pub fn stock_update_statement(backend: DbBackend, movement: &StockMovement) -> String {
    InventoryItem::update_many()
        .col_expr(
            InventoryItemColumn::Quantity,
            Expr::col(InventoryItemColumn::Quantity).sub(movement.amount),
        )
        .filter(InventoryItemColumn::Id.eq(movement.inventory_item_id))
        .build(backend)
        .to_string()
}

/// Writes `seed_data.sql`.
#[derive(Debug, Clone)]
pub struct SqlExporter {
    dir: PathBuf,
    backend: DbBackend,
    include_schema: bool,
}

impl SqlExporter {
    /// Creates an exporter writing into `dir` in the given dialect.
    #[must_use]
    pub fn new(dir: &Path, backend: DbBackend, include_schema: bool) -> Self {
        Self {
            dir: dir.to_path_buf(),
            backend,
            include_schema,
        }
    }

    fn write_rows<E>(&self, out: &mut dyn Write, rows: &[E::Model]) -> Result<()>
    where
        E: EntityTrait,
    {
        if rows.is_empty() {
            return Ok(());
        }
        writeln!(out, "\n-- {}", E::default().table_name())?;
        for row in rows {
            writeln!(out, "{};", insert_statement::<E>(self.backend, row)?)?;
        }
        Ok(())
    }

    fn write_script(&self, out: &mut dyn Write, dataset: &Dataset) -> Result<()> {
        writeln!(
            out,
            "-- Point-of-sale seed data, seed {}, {} through {}",
            dataset.summary.seed,
            dataset.range.start(),
            dataset.range.end()
        )?;

        if self.include_schema {
            writeln!(out)?;
            for statement in schema_statements(self.backend) {
                writeln!(out, "{};", self.backend.build(&statement))?;
            }
        }

        self.write_rows::<MenuItem>(out, &dataset.menu_items)?;
        self.write_rows::<InventoryItem>(out, &dataset.inventory)?;
        self.write_rows::<RecipeIngredient>(out, &dataset.recipes)?;
        self.write_rows::<Customer>(out, &dataset.customers)?;
        self.write_rows::<Employee>(out, &dataset.employees)?;

        writeln!(out, "\n-- orders")?;
        let mut lines = dataset.order_items.iter().peekable();
        let mut movements = dataset.stock_movements.iter().peekable();
        for order in &dataset.orders {
            writeln!(out, "{};", insert_statement::<Order>(self.backend, order)?)?;
            while let Some(line) = lines.next_if(|line| line.order_id == order.id) {
                writeln!(out, "{};", insert_statement::<OrderItem>(self.backend, line)?)?;
            }
            while let Some(movement) = movements.next_if(|m| m.order_id == order.id) {
                writeln!(out, "{};", stock_update_statement(self.backend, movement))?;
            }
        }

        writeln!(out)?;
        for line in dataset.summary.format_summary().lines() {
            writeln!(out, "-- {line}")?;
        }
        Ok(())
    }
}

impl Exporter for SqlExporter {
    fn export(&self, dataset: &Dataset) -> Result<Vec<PathBuf>> {
        let path = self.dir.join(SCRIPT_NAME);
        write_atomically(&path, |out| self.write_script(out, dataset))?;
        Ok(vec![path])
    }
}
