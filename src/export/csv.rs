//! CSV serializer - one file per table, header taken from the entity columns.

use crate::{
    dataset::Dataset,
    entities::{Customer, Employee, InventoryItem, MenuItem, Order, OrderItem, RecipeIngredient},
    errors::Result,
    export::{Exporter, write_atomically},
};
use sea_orm::{EntityName, EntityTrait, IdenStatic, Iterable};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Writes every table as `<table>.csv`.
///
/// `inventory.csv` holds the closing stock, after all consumption.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    /// Creates an exporter writing into `dir`.
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn write_table<E>(&self, rows: &[E::Model]) -> Result<PathBuf>
    where
        E: EntityTrait,
        E::Model: Serialize,
    {
        let path = self.dir.join(format!("{}.csv", E::default().table_name()));
        let header: Vec<String> = E::Column::iter()
            .map(|column| column.as_str().to_owned())
            .collect();
        write_atomically(&path, |out| {
            let mut writer = ::csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(out);
            writer.write_record(&header)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            Ok(())
        })?;
        Ok(path)
    }
}

impl Exporter for CsvExporter {
    fn export(&self, dataset: &Dataset) -> Result<Vec<PathBuf>> {
        Ok(vec![
            self.write_table::<MenuItem>(&dataset.menu_items)?,
            self.write_table::<InventoryItem>(&dataset.closing_inventory)?,
            self.write_table::<RecipeIngredient>(&dataset.recipes)?,
            self.write_table::<Customer>(&dataset.customers)?,
            self.write_table::<Employee>(&dataset.employees)?,
            self.write_table::<Order>(&dataset.orders)?,
            self.write_table::<OrderItem>(&dataset.order_items)?,
        ])
    }
}
