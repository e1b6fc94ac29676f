//! Shared test utilities for the seeder.
//!
//! This module provides a seeded random source, small fixed catalogs and the
//! one-week $700 scenario most tests run against.

use crate::{
    config::{CatalogConfig, GeneratorConfig, ItemConfig, OutputConfig, SeederConfig},
    entities::menu_item,
    errors::Result,
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sea_orm::DatabaseConnection;
use std::path::Path;

/// Shorthand for a calendar date known to be valid.
#[allow(clippy::unwrap_used)]
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The generator's random source at a fixed seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Two base items: A at $10 (id 1) and B at $20 (id 2).
#[must_use]
pub fn two_item_menu() -> Vec<menu_item::Model> {
    vec![
        menu_item::Model {
            id: 1,
            name: "A".to_string(),
            price: 10.0,
            is_mod: false,
            description: "item a".to_string(),
        },
        menu_item::Model {
            id: 2,
            name: "B".to_string(),
            price: 20.0,
            is_mod: false,
            description: "item b".to_string(),
        },
    ]
}

/// 2024-01-01 through 2024-01-07, $700 target, one peak day.
///
/// # Defaults
/// * `seed`: 7
/// * `daily_noise`: 0.8-1.2
/// * `peak_multiplier`: 3.0-4.0
/// * `customers`: 10, `employees`: 3
#[must_use]
pub fn week_generator_config() -> GeneratorConfig {
    GeneratorConfig {
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 7),
        target_revenue: 700.0,
        peak_days: 1,
        seed: 7,
        customers: 10,
        employees: 3,
        daily_noise: (0.8, 1.2),
        peak_multiplier: (3.0, 4.0),
        ..GeneratorConfig::default()
    }
}

/// The week scenario with the A/B catalog, three ingredients, and output
/// directed at `dir`.
#[must_use]
pub fn week_seeder_config(dir: &Path) -> SeederConfig {
    SeederConfig {
        generator: week_generator_config(),
        catalog: CatalogConfig {
            menu_items: vec![
                ItemConfig {
                    name: "A".to_string(),
                    price: 10.0,
                    description: "item a".to_string(),
                },
                ItemConfig {
                    name: "B".to_string(),
                    price: 20.0,
                    description: "item b".to_string(),
                },
            ],
            addons: Vec::new(),
            inventory: vec![
                "Tapioca Pearls".to_string(),
                "Black Tea".to_string(),
                "Cups".to_string(),
            ],
            size: None,
        },
        output: OutputConfig {
            dir: dir.to_path_buf(),
            database_url: None,
            ..OutputConfig::default()
        },
    }
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}
