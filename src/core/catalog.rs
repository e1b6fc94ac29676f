//! Catalog builder - turns the configured menu and add-ons into menu item rows.

use crate::{
    config::{CatalogConfig, ItemConfig},
    core::money::{from_cents, to_cents},
    entities::menu_item,
    errors::{Error, Result},
};
use rand::Rng;
use tracing::debug;

/// Price band for generated padding items, in dollars.
const SPECIAL_PRICE_RANGE: (f64, f64) = (2.0, 10.0);

/// Builds the sellable catalog: base items first, then add-ons.
///
/// Ids are sequential from 1 and prices are rounded to cents. When
/// `config.size` is set, the base menu is truncated to it or padded with
/// generated "Seasonal Special" items priced at random.
///
/// # Errors
/// Returns an error if:
/// - A price is negative or not finite
/// - The catalog is empty or no item has a positive price
pub fn build_menu<R: Rng>(config: &CatalogConfig, rng: &mut R) -> Result<Vec<menu_item::Model>> {
    let mut base: Vec<ItemConfig> = config.menu_items.clone();
    if let Some(size) = config.size {
        base.truncate(size);
        while base.len() < size {
            let name = format!("Seasonal Special {}", base.len() + 1);
            let price = rng.gen_range(SPECIAL_PRICE_RANGE.0..=SPECIAL_PRICE_RANGE.1);
            base.push(ItemConfig {
                description: format!("limited-time {}", name.to_lowercase()),
                name,
                price,
            });
        }
    }

    let items = base
        .iter()
        .map(|item| (item, false))
        .chain(config.addons.iter().map(|item| (item, true)));

    let mut menu = Vec::with_capacity(base.len() + config.addons.len());
    for (id, (item, is_mod)) in (1_i64..).zip(items) {
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(Error::InvalidAmount { amount: item.price });
        }
        menu.push(menu_item::Model {
            id,
            name: item.name.trim().to_string(),
            price: from_cents(to_cents(item.price)),
            is_mod,
            description: item.description.clone(),
        });
    }

    validate_menu(&menu)?;
    debug!("Built catalog with {} items", menu.len());
    Ok(menu)
}

/// Checks that a catalog can carry revenue: non-empty, with at least one
/// positively priced item.
///
/// # Errors
/// Returns [`Error::EmptyCatalog`] otherwise.
pub fn validate_menu(menu: &[menu_item::Model]) -> Result<()> {
    if menu.iter().any(|item| to_cents(item.price) > 0) {
        Ok(())
    } else {
        Err(Error::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::seeded_rng;

    fn item(name: &str, price: f64) -> ItemConfig {
        ItemConfig {
            name: name.to_string(),
            price,
            description: String::new(),
        }
    }

    #[test]
    fn test_build_default_menu() {
        let menu = build_menu(&CatalogConfig::default(), &mut seeded_rng(1)).unwrap();
        assert_eq!(menu.len(), 36);
        assert_eq!(menu[0].id, 1);
        assert_eq!(menu[35].id, 36);
        assert!(!menu[0].is_mod);
        assert!(menu[20].is_mod);
        assert_eq!(menu.iter().filter(|m| m.is_mod).count(), 16);
    }

    #[test]
    fn test_size_truncates_base_items() {
        let config = CatalogConfig {
            size: Some(5),
            ..Default::default()
        };
        let menu = build_menu(&config, &mut seeded_rng(1)).unwrap();
        assert_eq!(menu.iter().filter(|m| !m.is_mod).count(), 5);
    }

    #[test]
    fn test_size_pads_with_specials() {
        let config = CatalogConfig {
            menu_items: vec![item("A", 10.0)],
            addons: Vec::new(),
            size: Some(4),
            ..Default::default()
        };
        let menu = build_menu(&config, &mut seeded_rng(1)).unwrap();
        assert_eq!(menu.len(), 4);
        assert_eq!(menu[1].name, "Seasonal Special 2");
        for special in &menu[1..] {
            assert!((2.0..=10.0).contains(&special.price));
            // rounded to cents
            assert_eq!(from_cents(to_cents(special.price)), special.price);
        }
    }

    #[test]
    fn test_prices_rounded_to_cents() {
        let config = CatalogConfig {
            menu_items: vec![item("A", 3.456)],
            addons: Vec::new(),
            ..Default::default()
        };
        let menu = build_menu(&config, &mut seeded_rng(1)).unwrap();
        assert_eq!(menu[0].price, 3.46);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let config = CatalogConfig {
            menu_items: Vec::new(),
            addons: Vec::new(),
            ..Default::default()
        };
        let result = build_menu(&config, &mut seeded_rng(1));
        assert!(matches!(result.unwrap_err(), Error::EmptyCatalog));
    }

    #[test]
    fn test_only_free_items_rejected() {
        let config = CatalogConfig {
            menu_items: Vec::new(),
            addons: vec![item("No Ice", 0.0)],
            ..Default::default()
        };
        let result = build_menu(&config, &mut seeded_rng(1));
        assert!(matches!(result.unwrap_err(), Error::EmptyCatalog));
    }

    #[test]
    fn test_negative_price_rejected() {
        let config = CatalogConfig {
            menu_items: vec![item("A", -1.0)],
            ..Default::default()
        };
        let result = build_menu(&config, &mut seeded_rng(1));
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -1.0 }
        ));
    }
}
