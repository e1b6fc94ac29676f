//! Analytical query catalog shipped next to the seed data.
//!
//! The statements are written for `PostgreSQL` against the seeded tables and
//! are parameterised by the generation window so they return rows for any
//! configured range.

use crate::core::calendar::DayRange;
use chrono::{Datelike, NaiveDate};

/// A titled SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticalQuery {
    /// What the query answers
    pub title: String,
    /// The statement, terminated by `;`
    pub sql: String,
    /// Whether it belongs to the special section
    pub special: bool,
}

impl AnalyticalQuery {
    fn required(title: &str, sql: String) -> Self {
        Self {
            title: title.to_string(),
            sql,
            special: false,
        }
    }

    fn special(title: &str, sql: String) -> Self {
        Self {
            title: title.to_string(),
            sql,
            special: true,
        }
    }
}

fn between(from: NaiveDate, to: NaiveDate) -> String {
    format!(
        "complete_time BETWEEN '{from} 00:00:00'::timestamp AND '{to} 23:59:59'::timestamp"
    )
}

/// Last day of the first calendar month touched by the range, capped at the range end.
fn first_month_end(range: &DayRange) -> NaiveDate {
    let start = range.start();
    let next_month = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    next_month
        .and_then(|d| d.pred_opt())
        .map_or(range.end(), |end| end.min(range.end()))
}

/// Builds the 15 required and 4 special queries.
///
/// `featured_item` names the menu item the ingredient-count query looks up.
#[must_use]
pub fn query_catalog(range: &DayRange, featured_item: &str) -> Vec<AnalyticalQuery> {
    let first_month = between(range.start(), first_month_end(range));
    let whole_range = between(range.start(), range.end());
    let featured = featured_item.replace('\'', "''");

    vec![
        AnalyticalQuery::required(
            "Top 10 customers by orders in a given time period",
            format!(
                "SELECT customer_id, COUNT(*) AS order_count FROM orders \
                 WHERE {first_month} GROUP BY customer_id ORDER BY order_count DESC LIMIT 10;"
            ),
        ),
        AnalyticalQuery::required(
            "Top 10 customers by total spending in a given time period",
            format!(
                "SELECT customer_id, SUM(order_total_price) AS total_spent FROM orders \
                 WHERE {first_month} GROUP BY customer_id ORDER BY total_spent DESC LIMIT 10;"
            ),
        ),
        AnalyticalQuery::required(
            "Top 5 employees handling the most orders",
            "SELECT employee_id, COUNT(*) AS handled_orders FROM orders \
             GROUP BY employee_id ORDER BY handled_orders DESC LIMIT 5;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 5 employees generating the most revenue",
            "SELECT employee_id, SUM(order_total_price) AS sales_generated FROM orders \
             GROUP BY employee_id ORDER BY sales_generated DESC LIMIT 5;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 10 most popular menu items (by times ordered)",
            "SELECT menu_item_id, COUNT(*) AS times_ordered FROM joint_order_items \
             GROUP BY menu_item_id ORDER BY times_ordered DESC LIMIT 10;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 10 least popular menu items (by times ordered)",
            "SELECT menu_item_id, COUNT(*) AS times_ordered FROM joint_order_items \
             GROUP BY menu_item_id ORDER BY times_ordered ASC LIMIT 10;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 5 inventory items running lowest",
            "SELECT name, quantity FROM inventory ORDER BY quantity ASC LIMIT 5;".to_string(),
        ),
        AnalyticalQuery::required(
            "Top 5 inventory items most in stock",
            "SELECT name, quantity FROM inventory ORDER BY quantity DESC LIMIT 5;".to_string(),
        ),
        AnalyticalQuery::required(
            "Average order value",
            "SELECT AVG(order_total_price) AS avg_order_value FROM orders;".to_string(),
        ),
        AnalyticalQuery::required(
            "Top 5 busiest days by order count",
            "SELECT DATE(complete_time) AS order_date, COUNT(*) AS daily_orders FROM orders \
             GROUP BY order_date ORDER BY daily_orders DESC LIMIT 5;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 5 days with the lowest sales totals",
            "SELECT DATE(complete_time) AS order_date, SUM(order_total_price) AS daily_sales \
             FROM orders GROUP BY order_date ORDER BY daily_sales ASC LIMIT 5;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 5 menu items that use the most inventory items",
            "SELECT menu_item_id, COUNT(inventory_item_id) AS inventory_count \
             FROM joint_recipe_ingredients GROUP BY menu_item_id \
             ORDER BY inventory_count DESC LIMIT 5;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 5 months with the highest sales",
            "SELECT DATE_TRUNC('month', complete_time) AS order_month, \
             SUM(order_total_price) AS monthly_sales FROM orders \
             GROUP BY order_month ORDER BY monthly_sales DESC LIMIT 5;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 10 highest revenue-generating menu items",
            "SELECT mi.name, SUM(joi.price) AS total_revenue FROM joint_order_items joi \
             JOIN menu_items mi ON joi.menu_item_id = mi.id \
             GROUP BY mi.name ORDER BY total_revenue DESC LIMIT 10;"
                .to_string(),
        ),
        AnalyticalQuery::required(
            "Top 10 most frequently used inventory items in recipes",
            "SELECT i.name, SUM(jri.quantity_used) AS total_used \
             FROM joint_recipe_ingredients jri JOIN inventory i ON jri.inventory_item_id = i.id \
             GROUP BY i.name ORDER BY total_used DESC LIMIT 10;"
                .to_string(),
        ),
        AnalyticalQuery::special(
            "Weekly Sales History",
            format!(
                "SELECT EXTRACT(WEEK FROM complete_time) AS week_number, COUNT(*) AS orders_count \
                 FROM orders WHERE {whole_range} GROUP BY week_number ORDER BY week_number;"
            ),
        ),
        AnalyticalQuery::special(
            "Realistic Sales History",
            format!(
                "SELECT EXTRACT(HOUR FROM complete_time) AS order_hour, COUNT(*) AS orders_count, \
                 SUM(order_total_price) AS total_sales FROM orders WHERE {whole_range} \
                 GROUP BY order_hour ORDER BY order_hour;"
            ),
        ),
        AnalyticalQuery::special(
            "Peak Sales Day",
            format!(
                "SELECT DATE(complete_time) AS order_date, SUM(order_total_price) AS daily_total \
                 FROM orders WHERE {whole_range} GROUP BY order_date \
                 ORDER BY daily_total DESC LIMIT 10;"
            ),
        ),
        AnalyticalQuery::special(
            "Menu Item Inventory",
            format!(
                "SELECT mi.name AS menu_item, COUNT(jri.inventory_item_id) AS num_ingredients \
                 FROM menu_items mi JOIN joint_recipe_ingredients jri ON mi.id = jri.menu_item_id \
                 WHERE mi.name = '{featured}' GROUP BY mi.name;"
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::date;

    fn year() -> DayRange {
        DayRange::new(date(2024, 1, 1), date(2024, 12, 29)).unwrap()
    }

    #[test]
    fn test_catalog_shape() {
        let catalog = query_catalog(&year(), "Classic Pearl Milk Tea");
        assert_eq!(catalog.len(), 19);
        assert_eq!(catalog.iter().filter(|q| !q.special).count(), 15);
        assert_eq!(catalog.iter().filter(|q| q.special).count(), 4);
        // required queries come first
        assert!(catalog[..15].iter().all(|q| !q.special));
        assert!(catalog.iter().all(|q| q.sql.ends_with(';')));
    }

    #[test]
    fn test_window_follows_range() {
        let catalog = query_catalog(&year(), "Classic Pearl Milk Tea");
        assert!(catalog[0].sql.contains("'2024-01-01 00:00:00'"));
        assert!(catalog[0].sql.contains("'2024-01-31 23:59:59'"));
        assert!(catalog[15].sql.contains("'2024-12-29 23:59:59'"));
    }

    #[test]
    fn test_first_month_capped_at_range_end() {
        let range = DayRange::new(date(2024, 12, 20), date(2024, 12, 24)).unwrap();
        assert_eq!(first_month_end(&range), date(2024, 12, 24));

        let range = DayRange::new(date(2024, 12, 20), date(2025, 2, 1)).unwrap();
        assert_eq!(first_month_end(&range), date(2024, 12, 31));
    }

    #[test]
    fn test_featured_item_quoted() {
        let catalog = query_catalog(&year(), "Oreo's Pearl");
        assert!(catalog[18].sql.contains("WHERE mi.name = 'Oreo''s Pearl'"));
    }

    #[test]
    fn test_queries_use_entity_columns() {
        let catalog = query_catalog(&year(), "A");
        for query in &catalog {
            assert!(!query.sql.contains("total_price)") || query.sql.contains("order_total_price"));
            assert!(!query.sql.contains("timestamp BETWEEN"));
        }
    }
}
