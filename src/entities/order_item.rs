//! Order line entity - One unit of a menu item sold on an order.
//!
//! The same menu item may appear several times on one order. `price` is what
//! the line was charged; it equals the catalog price except on the order that
//! closes out a day's revenue target, whose lines are re-apportioned.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "joint_order_items")]
pub struct Model {
    /// Sequential identifier, starting at 1
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Order this line belongs to
    pub order_id: i64,
    /// Menu item sold
    pub menu_item_id: i64,
    /// Price charged for this line, in dollars
    pub price: f64,
}

/// Defines relationships between `OrderItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    /// Each line sells one menu item
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::MenuItemId",
        to = "super::menu_item::Column::Id"
    )]
    MenuItem,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
