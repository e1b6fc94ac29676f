//! Entity module - Contains all SeaORM entity definitions for the generated tables.
//! These entities are both the in-memory record model the generator produces and
//! the schema every exporter writes. Each entity has a Model struct for data and
//! an Entity struct for building statements.

pub mod customer;
pub mod employee;
pub mod inventory_item;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod recipe_ingredient;

// Re-export specific types to avoid conflicts
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use inventory_item::{
    Column as InventoryItemColumn, Entity as InventoryItem, Model as InventoryItemModel,
};
pub use menu_item::{Column as MenuItemColumn, Entity as MenuItem, Model as MenuItemModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use order_item::{Column as OrderItemColumn, Entity as OrderItem, Model as OrderItemModel};
pub use recipe_ingredient::{
    Column as RecipeIngredientColumn, Entity as RecipeIngredient, Model as RecipeIngredientModel,
};
