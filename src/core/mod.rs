//! Core generation logic - framework-agnostic builders for every seeded table
//! and the order/revenue distributor that ties them together.
//!
//! Every function that needs randomness takes the caller's random source by
//! `&mut`, so a whole run is reproducible from one seed.

/// Date window, peak days and time-of-day profile
pub mod calendar;
/// Menu construction and validation
pub mod catalog;
/// Order/revenue distributor
pub mod distributor;
/// Inventory, recipes and the stock ledger
pub mod inventory;
/// Integer-cent arithmetic
pub mod money;
/// Customers, employees and loyalty balances
pub mod people;
/// Analytical query catalog
pub mod queries;
/// Run summary
pub mod report;
