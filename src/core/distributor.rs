//! Order/revenue distributor - turns a revenue target (or an order count)
//! over a date window into individual orders and order lines.
//!
//! Two strategies are supported:
//!
//! - [`Strategy::Target`] splits the revenue target into daily targets
//!   (noise, weekday and peak multipliers, then exact apportionment in cents)
//!   and fills each day with baskets until the day's target is met. The order
//!   that would overshoot, or leave less than the minimum order value, closes
//!   the day with the exact remainder.
//! - [`Strategy::OrderCount`] draws a fixed number of independent orders at
//!   uniform timestamps. Revenue is whatever the baskets add up to.
//!
//! In both, baskets hold 1-3 lines, or 3-9 lines on peak days. The first
//! line is always a priced base item; the rest are drawn uniformly from the
//! whole catalog with replacement, so add-ons only ride along.

use crate::{
    config::{GeneratorConfig, Strategy},
    core::{
        calendar::{DayRange, HourProfile, select_peak_days, uniform_timestamp},
        catalog::validate_menu,
        money::{apportion, format_cents, from_cents, loyalty_points, to_cents},
    },
    entities::{menu_item, order, order_item},
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, info};

const REGULAR_LINES: (usize, usize) = (1, 3);
const PEAK_LINES: (usize, usize) = (3, 9);

/// Everything one distributor run produces.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    /// Orders, ids increasing with completion time
    pub orders: Vec<order::Model>,
    /// Order lines, grouped by order in order-id order
    pub lines: Vec<order_item::Model>,
    /// Days that received a demand spike
    pub peak_days: BTreeSet<NaiveDate>,
    /// Per-day revenue targets in cents; empty for [`Strategy::OrderCount`]
    pub daily_targets: Vec<i64>,
}

/// An order before ids, customers and employees are assigned.
#[derive(Debug)]
struct DraftOrder {
    time: NaiveDateTime,
    items: Vec<usize>,
    prices: Vec<i64>,
}

/// Generates orders against a fixed catalog and window.
#[derive(Debug)]
pub struct Distributor<'a> {
    config: &'a GeneratorConfig,
    menu: &'a [menu_item::Model],
    prices: Vec<i64>,
    /// Indices allowed as the first line of a basket
    anchors: Vec<usize>,
    min_order: i64,
    range: DayRange,
    hours: HourProfile,
}

impl<'a> Distributor<'a> {
    /// Prepares a distributor, validating the configuration and catalog.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, the catalog has no
    /// positively priced item, or (for the target strategy) no regular basket
    /// can reach `min_order_value`.
    pub fn new(config: &'a GeneratorConfig, menu: &'a [menu_item::Model]) -> Result<Self> {
        config.validate()?;
        validate_menu(menu)?;
        let prices: Vec<i64> = menu.iter().map(|item| to_cents(item.price)).collect();
        let anchors = anchor_items(menu, &prices);
        let min_order = to_cents(config.min_order_value).max(1);

        if config.strategy == Strategy::Target {
            let top_anchor = anchors.iter().map(|&i| prices[i]).max().unwrap_or(0);
            let top_price = prices.iter().copied().max().unwrap_or(0);
            let extra_lines = i64::try_from(REGULAR_LINES.1 - 1).unwrap_or(0);
            let largest = top_anchor + extra_lines * top_price;
            if largest < min_order {
                return Err(Error::config(format!(
                    "min_order_value {} exceeds the largest regular basket {}",
                    format_cents(min_order),
                    format_cents(largest)
                )));
            }
        }

        Ok(Self {
            config,
            menu,
            prices,
            anchors,
            min_order,
            range: DayRange::new(config.start_date, config.end_date)?,
            hours: HourProfile::cafe()?,
        })
    }

    /// The generation window.
    #[must_use]
    pub const fn range(&self) -> &DayRange {
        &self.range
    }

    /// Runs the configured strategy.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Distribution {
        let peak_days = select_peak_days(&self.range, self.config.peak_days, rng);

        let (drafts, daily_targets) = match self.config.strategy {
            Strategy::OrderCount => (self.order_count_drafts(&peak_days, rng), Vec::new()),
            Strategy::Target => {
                let targets = self.daily_targets(&peak_days, rng);
                let drafts = self.target_drafts(&targets, &peak_days, rng);
                (drafts, targets)
            }
        };

        let mut distribution = self.finish(drafts, rng);
        distribution.peak_days = peak_days;
        distribution.daily_targets = daily_targets;

        info!(
            "Distributed {} orders ({} lines) over {} days",
            distribution.orders.len(),
            distribution.lines.len(),
            self.range.len()
        );
        distribution
    }

    /// Picks basket contents: menu indices, duplicates allowed, an anchor first.
    fn draw_basket<R: Rng>(&self, peak: bool, rng: &mut R) -> Vec<usize> {
        let (low, high) = if peak { PEAK_LINES } else { REGULAR_LINES };
        let lines = rng.gen_range(low..=high);
        let mut items = Vec::with_capacity(lines);
        items.push(self.anchors[rng.gen_range(0..self.anchors.len())]);
        items.extend((1..lines).map(|_| rng.gen_range(0..self.menu.len())));
        items
    }

    fn order_count_drafts<R: Rng>(&self, peaks: &BTreeSet<NaiveDate>, rng: &mut R) -> Vec<DraftOrder> {
        let mut drafts = Vec::with_capacity(self.config.order_count);
        for _ in 0..self.config.order_count {
            let time = uniform_timestamp(&self.range, rng);
            let items = self.draw_basket(peaks.contains(&time.date()), rng);
            let prices = items.iter().map(|&i| self.prices[i]).collect();
            drafts.push(DraftOrder { time, items, prices });
        }
        drafts.sort_by_key(|draft| draft.time);
        drafts
    }

    /// Splits the revenue target into per-day cents that sum exactly to it.
    fn daily_targets<R: Rng>(&self, peaks: &BTreeSet<NaiveDate>, rng: &mut R) -> Vec<i64> {
        #[allow(clippy::cast_precision_loss)]
        let average = self.config.target_revenue / self.range.len() as f64;
        let (noise_low, noise_high) = self.config.daily_noise;
        let (peak_low, peak_high) = self.config.peak_multiplier;

        let weights: Vec<f64> = self
            .range
            .days()
            .map(|day| {
                let noise = rng.gen_range(noise_low..=noise_high);
                let weekday = if day.weekday().number_from_monday() <= 5 {
                    self.config.weekday_multiplier
                } else {
                    self.config.weekend_multiplier
                };
                let spike = if peaks.contains(&day) {
                    rng.gen_range(peak_low..=peak_high)
                } else {
                    1.0
                };
                average * noise * weekday * spike
            })
            .collect();

        apportion(to_cents(self.config.target_revenue), &weights)
    }

    fn target_drafts<R: Rng>(
        &self,
        targets: &[i64],
        peaks: &BTreeSet<NaiveDate>,
        rng: &mut R,
    ) -> Vec<DraftOrder> {
        let min_order = self.min_order;
        let mut drafts = Vec::new();

        for (day, &target) in self.range.days().zip(targets) {
            let peak = peaks.contains(&day);
            let mut remaining = target;
            let mut day_drafts = Vec::new();

            while remaining > 0 {
                let items = self.draw_basket(peak, rng);
                let mut prices: Vec<i64> = items.iter().map(|&i| self.prices[i]).collect();
                let basket: i64 = prices.iter().sum();
                let leftover = remaining - basket;

                if leftover == 0 {
                    remaining = 0;
                } else if leftover >= min_order {
                    if basket < min_order {
                        continue;
                    }
                    remaining = leftover;
                } else {
                    // Last order of the day absorbs the exact remainder.
                    #[allow(clippy::cast_precision_loss)]
                    let weights: Vec<f64> = prices.iter().map(|&p| p as f64).collect();
                    prices = apportion(remaining, &weights);
                    remaining = 0;
                }

                day_drafts.push(DraftOrder {
                    time: self.hours.timestamp_on(day, rng),
                    items,
                    prices,
                });
            }

            day_drafts.sort_by_key(|draft| draft.time);
            debug!(
                "{day}: target {} in {} orders{}",
                target,
                day_drafts.len(),
                if peak { " (peak)" } else { "" }
            );
            drafts.extend(day_drafts);
        }
        drafts
    }

    /// Numbers drafts and assigns customers, employees and loyalty.
    fn finish<R: Rng>(&self, drafts: Vec<DraftOrder>, rng: &mut R) -> Distribution {
        let customers = i64::try_from(self.config.customers).unwrap_or(i64::MAX);
        let employees = i64::try_from(self.config.employees).unwrap_or(i64::MAX);
        let mut orders = Vec::with_capacity(drafts.len());
        let mut lines = Vec::new();

        for (order_id, draft) in (1_i64..).zip(drafts) {
            let total: i64 = draft.prices.iter().sum();
            orders.push(order::Model {
                id: order_id,
                customer_id: rng.gen_range(1..=customers),
                complete_time: draft.time,
                order_total_price: from_cents(total),
                pearls_earned: loyalty_points(total, self.config.loyalty_divisor),
                employee_id: rng.gen_range(1..=employees),
            });

            for (&item, &price) in draft.items.iter().zip(&draft.prices) {
                lines.push(order_item::Model {
                    id: i64::try_from(lines.len()).unwrap_or(i64::MAX) + 1,
                    order_id,
                    menu_item_id: self.menu[item].id,
                    price: from_cents(price),
                });
            }
        }

        Distribution {
            orders,
            lines,
            ..Default::default()
        }
    }
}

/// Priced base items, or every priced item when the catalog has no base item.
fn anchor_items(menu: &[menu_item::Model], prices: &[i64]) -> Vec<usize> {
    let priced = |&i: &usize| prices[i] > 0;
    let base: Vec<usize> = (0..menu.len())
        .filter(|&i| !menu[i].is_mod)
        .filter(priced)
        .collect();
    if base.is_empty() {
        (0..menu.len()).filter(priced).collect()
    } else {
        base
    }
}
