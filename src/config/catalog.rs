//! Catalog configuration - the menu, add-ons and inventory names to seed.
//!
//! The defaults describe a bubble-tea shop. A `[catalog]` table in config.toml
//! replaces any of the three lists wholesale.

use serde::Deserialize;

/// A priced entry in the menu or add-on list.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    /// Display name
    pub name: String,
    /// Unit price in dollars
    pub price: f64,
    /// Free-text description
    pub description: String,
}

impl ItemConfig {
    fn new(name: &str, price: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            description: description.to_string(),
        }
    }
}

/// Everything the catalog and inventory builders read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base drinks, each of which gets a recipe
    pub menu_items: Vec<ItemConfig>,
    /// Toppings and modifiers; no recipe, price may be zero
    pub addons: Vec<ItemConfig>,
    /// Ingredient and supply names
    pub inventory: Vec<String>,
    /// Number of base items to sell; pads with generated specials or truncates
    pub size: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let drinks = [
            ("Classic Pearl Milk Tea", 3.5),
            ("Honey Pearl Milk Tea", 4.75),
            ("Coffee Creama", 4.5),
            ("Thai Pearl Milk Tea", 4.25),
            ("Mango Green Milk Tea", 4.0),
            ("Taro Pearl Milk Tea", 4.0),
            ("Hokkaido Pearl Milk Tea", 6.5),
            ("Coconut Pearl Milk Tea", 3.75),
            ("Mango Green Tea", 3.5),
            ("Berry Lychee Burst", 6.0),
            ("Honey Lemonade", 3.5),
            ("Wintermelon Lemonade", 3.75),
            ("Halo Halo", 5.5),
            ("Matcha Pearl Milk Tea", 4.5),
            ("Strawberry Matcha Fresh Milk", 4.25),
            ("Mango Matcha Fresh Milk", 4.0),
            ("Oreo w/ Pearl", 4.75),
            ("Taro w/ Pudding", 4.5),
            ("Lava Flow", 6.0),
            ("Peach Tea w/ Lychee Jelly", 3.5),
        ];
        let toppings = [
            "Boba",
            "Coffee Jelly",
            "Pudding",
            "Lychee Jelly",
            "Honey Jelly",
            "Crystal Boba",
            "Mango Popping Boba",
            "Strawberry Popping Boba",
            "Ice Cream",
            "Crema",
        ];
        let modifiers = [
            "Less Ice",
            "No Ice",
            "Less Sweetness",
            "Half Sweetness",
            "Light Sweetness",
            "No Sugar",
        ];
        let inventory = [
            "Black Tea Leaves",
            "Green Tea Leaves",
            "Sugar",
            "Milk",
            "Condensed Milk",
            "Coconut Milk",
            "Matcha Powder",
            "Taro Powder",
            "Chocolate Syrup",
            "Mango Syrup",
            "Strawberry Syrup",
            "Lychee Syrup",
            "Lemon Juice",
            "Honey",
            "Coffee Beans",
            "Whipped Cream",
            "Oreo Crumbs",
            "Pudding Mix",
            "Jelly Mix",
            "Tapioca Pearls",
            "Ice Cubes",
            "Cups",
            "Lids",
            "Straws",
            "Napkins",
        ];

        Self {
            menu_items: drinks
                .iter()
                .map(|(name, price)| ItemConfig::new(name, *price, &format!("yummy {name}!")))
                .collect(),
            addons: toppings
                .iter()
                .map(|name| {
                    ItemConfig::new(name, 0.75, &format!("add {} to any drink", name.to_lowercase()))
                })
                .chain(modifiers.iter().map(|name| {
                    ItemConfig::new(name, 0.0, &format!("{} in any drink", name.to_lowercase()))
                }))
                .collect(),
            inventory: inventory.iter().map(ToString::to_string).collect(),
            size: None,
        }
    }
}
