//! Customer and employee builders.

use crate::entities::{customer, employee, order};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

const FIRST_NAMES: &[&str] = &[
    "Avery", "Jordan", "Riley", "Casey", "Morgan", "Taylor", "Quinn", "Rowan", "Emerson", "Hayden",
    "Skyler", "Jamie", "Dakota", "Reese", "Alex", "Sam", "Mei", "Diego", "Priya", "Kenji", "Amara",
    "Luca", "Noor", "Tomas",
];

const LAST_NAMES: &[&str] = &[
    "Nguyen", "Garcia", "Smith", "Patel", "Kim", "Johnson", "Lopez", "Chen", "Williams", "Brown",
    "Singh", "Martinez", "Okafor", "Rossi", "Tanaka", "Davis", "Hernandez", "Wilson", "Lee", "Moore",
];

fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
    format!("{first} {last}")
}

/// Builds `count` customers with random names and an empty loyalty balance.
pub fn build_customers<R: Rng>(count: usize, rng: &mut R) -> Vec<customer::Model> {
    (1_i64..)
        .take(count)
        .map(|id| customer::Model {
            id,
            name: random_name(rng),
            pearls_balance: 0,
        })
        .collect()
}

/// Builds `count` employees; the first is the manager, the rest alternate
/// between cashier and barista.
pub fn build_employees<R: Rng>(count: usize, rng: &mut R) -> Vec<employee::Model> {
    (1_i64..)
        .take(count)
        .map(|id| {
            let role = match id {
                1 => "manager",
                id if id % 2 == 0 => "cashier",
                _ => "barista",
            };
            employee::Model {
                id,
                name: random_name(rng),
                role: role.to_string(),
            }
        })
        .collect()
}

/// Sets each customer's balance to the points earned across their orders.
pub fn credit_loyalty(customers: &mut [customer::Model], orders: &[order::Model]) {
    let mut earned: HashMap<i64, i64> = HashMap::new();
    for order in orders {
        *earned.entry(order.customer_id).or_default() += order.pearls_earned;
    }
    for customer in customers {
        customer.pearls_balance = earned.get(&customer.id).copied().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, seeded_rng};

    fn order(id: i64, customer_id: i64, pearls_earned: i64) -> order::Model {
        order::Model {
            id,
            customer_id,
            complete_time: date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap_or_default(),
            order_total_price: 0.0,
            pearls_earned,
            employee_id: 1,
        }
    }

    #[test]
    fn test_build_customers() {
        let customers = build_customers(50, &mut seeded_rng(1));
        assert_eq!(customers.len(), 50);
        assert_eq!(customers[49].id, 50);
        assert!(customers.iter().all(|c| c.name.contains(' ')));
        assert!(customers.iter().all(|c| c.pearls_balance == 0));
    }

    #[test]
    fn test_build_employees_roles() {
        let employees = build_employees(5, &mut seeded_rng(1));
        let roles: Vec<&str> = employees.iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["manager", "cashier", "barista", "cashier", "barista"]);
    }

    #[test]
    fn test_credit_loyalty_sums_orders() {
        let mut customers = build_customers(3, &mut seeded_rng(1));
        let orders = vec![order(1, 1, 4), order(2, 3, 2), order(3, 1, 1)];

        credit_loyalty(&mut customers, &orders);
        assert_eq!(customers[0].pearls_balance, 5);
        assert_eq!(customers[1].pearls_balance, 0);
        assert_eq!(customers[2].pearls_balance, 2);
    }
}
