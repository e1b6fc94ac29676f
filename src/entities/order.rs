//! Order entity - One completed sale.
//!
//! `order_total_price` always equals the sum of the order's line prices, and
//! `pearls_earned` is derived from it with the configured loyalty divisor.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Sequential identifier, increasing with completion time
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Customer who placed the order
    pub customer_id: i64,
    /// When the order was completed
    pub complete_time: DateTime,
    /// Order total in dollars, rounded to cents
    pub order_total_price: f64,
    /// Loyalty points earned by this order
    pub pearls_earned: i64,
    /// Employee who handled the order
    pub employee_id: i64,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// Each order is handled by one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
    /// One order has many lines
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
