//! Generator configuration - the knobs of the order/revenue distributor.
//!
//! Every field has a documented default so an empty `[generator]` table (or no
//! config file at all) yields a full year of data for a small shop.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// How orders are produced from the configured window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Allocate the revenue target across days and emit orders until each day is met.
    Target,
    /// Emit a fixed number of orders; revenue is whatever the baskets add up to.
    OrderCount,
}

/// What happens when consumption exceeds the stock on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryPolicy {
    /// Stock never drops below zero; only what was on hand is removed.
    Clamp,
    /// Stock goes negative, which reads as a backorder.
    AllowNegative,
}

/// Parameters of one generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First day of the window (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the window (inclusive)
    pub end_date: NaiveDate,
    /// Total revenue to distribute, in dollars
    pub target_revenue: f64,
    /// Number of days that receive a demand spike
    pub peak_days: usize,
    /// Seed of the single random source
    pub seed: u64,
    /// Which distribution strategy to run
    pub strategy: Strategy,
    /// Number of orders for [`Strategy::OrderCount`]
    pub order_count: usize,
    /// Dollars per loyalty point (`pearls = floor(total / divisor)`)
    pub loyalty_divisor: u32,
    /// Size of the customer table
    pub customers: usize,
    /// Size of the employee table
    pub employees: usize,
    /// Smallest order the target strategy emits before closing out a day, in dollars
    pub min_order_value: f64,
    /// Uniform noise range applied to each day's share of the target
    pub daily_noise: (f64, f64),
    /// Uniform multiplier range applied to peak days
    pub peak_multiplier: (f64, f64),
    /// Multiplier for Monday through Friday
    pub weekday_multiplier: f64,
    /// Multiplier for Saturday and Sunday
    pub weekend_multiplier: f64,
    /// Whether sold items deplete inventory
    pub consume_inventory: bool,
    /// Floor policy for depleted inventory
    pub inventory_policy: InventoryPolicy,
    /// Opening stock as a multiple of the window's consumption, drawn per item;
    /// below 1.0 ingredients run out
    pub stock_cover: (f64, f64),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            // 52 weeks, inclusive
            end_date: NaiveDate::from_ymd_opt(2024, 12, 29).unwrap_or_default(),
            target_revenue: 1_000_000.0,
            peak_days: 2,
            seed: 42,
            strategy: Strategy::Target,
            order_count: 20_000,
            loyalty_divisor: 2,
            customers: 2_000,
            employees: 50,
            min_order_value: 0.50,
            daily_noise: (0.6, 1.4),
            peak_multiplier: (2.0, 4.0),
            weekday_multiplier: 1.05,
            weekend_multiplier: 0.9,
            consume_inventory: true,
            inventory_policy: InventoryPolicy::Clamp,
            stock_cover: (1.1, 1.5),
        }
    }
}

impl GeneratorConfig {
    /// Checks every parameter before any data is produced.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `end_date` is before `start_date`
    /// - `target_revenue` is not a positive finite number
    /// - `min_order_value` is negative or not finite
    /// - the loyalty divisor, customer count or employee count is zero
    /// - a multiplier range is inverted or not strictly positive
    /// - `stock_cover` is inverted, negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(Error::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if !self.target_revenue.is_finite() || self.target_revenue <= 0.0 {
            return Err(Error::InvalidAmount {
                amount: self.target_revenue,
            });
        }

        if !self.min_order_value.is_finite() || self.min_order_value < 0.0 {
            return Err(Error::InvalidAmount {
                amount: self.min_order_value,
            });
        }

        if self.loyalty_divisor == 0 {
            return Err(Error::config("loyalty_divisor must be at least 1"));
        }

        if self.customers == 0 || self.employees == 0 {
            return Err(Error::config(
                "customers and employees must both be at least 1",
            ));
        }

        check_range("daily_noise", self.daily_noise)?;
        check_range("peak_multiplier", self.peak_multiplier)?;
        check_range(
            "weekday_multiplier",
            (self.weekday_multiplier, self.weekday_multiplier),
        )?;
        check_range(
            "weekend_multiplier",
            (self.weekend_multiplier, self.weekend_multiplier),
        )?;

        let (cover_low, cover_high) = self.stock_cover;
        if !cover_low.is_finite()
            || !cover_high.is_finite()
            || cover_low < 0.0
            || cover_high < cover_low
        {
            return Err(Error::config(format!(
                "stock_cover must be a non-negative range with low <= high, got [{cover_low}, {cover_high}]"
            )));
        }

        Ok(())
    }
}

fn check_range(name: &str, (low, high): (f64, f64)) -> Result<()> {
    if !low.is_finite() || !high.is_finite() || low <= 0.0 || high < low {
        return Err(Error::config(format!(
            "{name} must be a positive range with low <= high, got [{low}, {high}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strategy, Strategy::Target);
        assert_eq!(config.loyalty_divisor, 2);
        assert_eq!((config.end_date - config.start_date).num_days() + 1, 364);
    }

    #[test]
    fn test_parse_partial_generator_config() {
        let toml_str = r#"
            start_date = "2024-01-01"
            end_date = "2024-01-07"
            target_revenue = 700.0
            peak_days = 1
            strategy = "order_count"
            inventory_policy = "allow_negative"
            daily_noise = [0.9, 1.1]
        "#;

        let config: GeneratorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.target_revenue, 700.0);
        assert_eq!(config.peak_days, 1);
        assert_eq!(config.strategy, Strategy::OrderCount);
        assert_eq!(config.inventory_policy, InventoryPolicy::AllowNegative);
        assert_eq!(config.daily_noise, (0.9, 1.1));
        // untouched fields keep their defaults
        assert_eq!(config.seed, 42);
        assert_eq!(config.customers, 2_000);
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let config = GeneratorConfig {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::InvalidDateRange { .. }
        ));
    }

    #[test]
    fn test_non_positive_target_rejected() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let config = GeneratorConfig {
                target_revenue: amount,
                ..Default::default()
            };
            assert!(matches!(
                config.validate().unwrap_err(),
                Error::InvalidAmount { amount: _ }
            ));
        }
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let config = GeneratorConfig {
            loyalty_divisor: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::Config { message: _ }
        ));
    }

    #[test]
    fn test_stock_cover_bounds() {
        let zero = GeneratorConfig {
            stock_cover: (0.0, 0.0),
            ..Default::default()
        };
        assert!(zero.validate().is_ok());

        for stock_cover in [(-0.5, 1.0), (1.5, 1.1), (1.0, f64::INFINITY)] {
            let config = GeneratorConfig {
                stock_cover,
                ..Default::default()
            };
            assert!(config.validate().unwrap_err().to_string().contains("stock_cover"));
        }
    }

    #[test]
    fn test_inverted_multiplier_range_rejected() {
        let config = GeneratorConfig {
            peak_multiplier: (4.0, 2.0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("peak_multiplier"));
    }
}
