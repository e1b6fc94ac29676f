//! Menu item entity - Represents a sellable drink or an add-on/modifier.
//!
//! Base drinks carry a recipe; modifiers (`is_mod = true`) such as toppings or
//! "less ice" carry a price that may be zero and no recipe. Rows are immutable
//! once the catalog is built.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    /// Sequential identifier, starting at 1
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Display name (e.g., "Classic Pearl Milk Tea")
    pub name: String,
    /// Unit price in dollars, rounded to cents
    pub price: f64,
    /// Whether this entry is an add-on/modifier rather than a base item
    pub is_mod: bool,
    /// Free-text description
    pub description: String,
}

/// Defines relationships between `MenuItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One menu item appears on many order lines
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
    /// One menu item has many recipe ingredients
    #[sea_orm(has_many = "super::recipe_ingredient::Entity")]
    RecipeIngredients,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::recipe_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
