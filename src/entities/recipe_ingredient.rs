//! Recipe edge entity - How many units of an inventory item one serving of a
//! menu item consumes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe ingredient database model (composite key)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "joint_recipe_ingredients")]
pub struct Model {
    /// Menu item this recipe belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub menu_item_id: i64,
    /// Ingredient consumed
    #[sea_orm(primary_key, auto_increment = false)]
    pub inventory_item_id: i64,
    /// Units consumed per serving
    pub quantity_used: i64,
}

/// Defines relationships between `RecipeIngredient` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each edge belongs to one menu item
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::MenuItemId",
        to = "super::menu_item::Column::Id"
    )]
    MenuItem,
    /// Each edge consumes one inventory item
    #[sea_orm(
        belongs_to = "super::inventory_item::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_item::Column::Id"
    )]
    InventoryItem,
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
