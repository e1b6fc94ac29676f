//! Inventory entity - Ingredients and supplies consumed by recipes.
//!
//! Quantities are whole units. The generator starts every item with an opening
//! stock and decrements it as orders are sold when consumption is modelled.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    /// Sequential identifier, starting at 1
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Ingredient or supply name (e.g., "Tapioca Pearls", "Cups")
    pub name: String,
    /// Units on hand
    pub quantity: i64,
    /// Cost of restocking one unit, in dollars
    pub restock_price: f64,
}

/// Defines relationships between `InventoryItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One inventory item is used by many recipes
    #[sea_orm(has_many = "super::recipe_ingredient::Entity")]
    RecipeIngredients,
}

impl Related<super::recipe_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
