//! Run summary - per-day and overall figures of a generated dataset.
//!
//! The summary is logged by the binary and embedded as the footer of the SQL
//! script. It carries no entities, only counts and cents.

use crate::{
    config::{GeneratorConfig, Strategy},
    core::{
        calendar::DayRange,
        distributor::Distribution,
        money::{format_cents, to_cents},
    },
};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Figures for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// The day
    pub date: NaiveDate,
    /// Orders completed on the day
    pub orders: usize,
    /// Order lines sold on the day
    pub lines: usize,
    /// Revenue in cents
    pub revenue_cents: i64,
    /// The day's revenue target in cents, when the target strategy ran
    pub target_cents: Option<i64>,
    /// Whether the day received a demand spike
    pub is_peak: bool,
}

/// Figures for a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Seed the run was generated from
    pub seed: u64,
    /// Strategy the run used
    pub strategy: Strategy,
    /// Number of days in the window
    pub days: usize,
    /// Total orders
    pub orders: usize,
    /// Total order lines
    pub lines: usize,
    /// Total revenue in cents
    pub revenue_cents: i64,
    /// Revenue target in cents, when the target strategy ran
    pub target_cents: Option<i64>,
    /// Days that received a demand spike
    pub peak_days: Vec<NaiveDate>,
    /// One entry per day of the window, in order
    pub daily: Vec<DaySummary>,
    /// Number of inventory decrements recorded
    pub stock_movements: usize,
}

impl RunSummary {
    /// Aggregates a distribution over its window.
    #[must_use]
    pub fn new(
        config: &GeneratorConfig,
        range: &DayRange,
        distribution: &Distribution,
        stock_movements: usize,
    ) -> Self {
        let mut per_day: HashMap<NaiveDate, (usize, usize, i64)> = HashMap::new();
        let mut lines_per_order: HashMap<i64, usize> = HashMap::new();
        for line in &distribution.lines {
            *lines_per_order.entry(line.order_id).or_default() += 1;
        }
        for order in &distribution.orders {
            let entry = per_day.entry(order.complete_time.date()).or_default();
            entry.0 += 1;
            entry.1 += lines_per_order.get(&order.id).copied().unwrap_or(0);
            entry.2 += to_cents(order.order_total_price);
        }

        let daily: Vec<DaySummary> = range
            .days()
            .enumerate()
            .map(|(index, date)| {
                let (orders, lines, revenue_cents) =
                    per_day.get(&date).copied().unwrap_or_default();
                DaySummary {
                    date,
                    orders,
                    lines,
                    revenue_cents,
                    target_cents: distribution.daily_targets.get(index).copied(),
                    is_peak: distribution.peak_days.contains(&date),
                }
            })
            .collect();

        let target_cents = match config.strategy {
            Strategy::Target => Some(to_cents(config.target_revenue)),
            Strategy::OrderCount => None,
        };

        Self {
            seed: config.seed,
            strategy: config.strategy,
            days: range.len(),
            orders: distribution.orders.len(),
            lines: distribution.lines.len(),
            revenue_cents: daily.iter().map(|d| d.revenue_cents).sum(),
            target_cents,
            peak_days: distribution.peak_days.iter().copied().collect(),
            daily,
            stock_movements,
        }
    }

    /// Mean revenue of peak days in cents, `None` without peak days.
    #[must_use]
    pub fn peak_average_revenue(&self) -> Option<i64> {
        self.average_revenue(true)
    }

    /// Mean revenue of ordinary days in cents, `None` if every day peaked.
    #[must_use]
    pub fn off_peak_average_revenue(&self) -> Option<i64> {
        self.average_revenue(false)
    }

    fn average_revenue(&self, peak: bool) -> Option<i64> {
        let days: Vec<&DaySummary> = self.daily.iter().filter(|d| d.is_peak == peak).collect();
        let count = i64::try_from(days.len()).ok().filter(|n| *n > 0)?;
        Some(days.iter().map(|d| d.revenue_cents).sum::<i64>() / count)
    }

    /// Mean lines per order on peak (or ordinary) days.
    #[must_use]
    pub fn average_lines(&self, peak: bool) -> Option<f64> {
        let (orders, lines) = self
            .daily
            .iter()
            .filter(|d| d.is_peak == peak)
            .fold((0, 0), |(o, l), d| (o + d.orders, l + d.lines));
        #[allow(clippy::cast_precision_loss)]
        (orders > 0).then(|| lines as f64 / orders as f64)
    }

    /// Multi-line human readable summary.
    #[must_use]
    pub fn format_summary(&self) -> String {
        use std::fmt::Write;

        let strategy = match self.strategy {
            Strategy::Target => "target",
            Strategy::OrderCount => "order_count",
        };
        let mut summary = format!(
            "Seed {} ({strategy}) - {} days, {} orders, {} lines\n",
            self.seed, self.days, self.orders, self.lines
        );

        // Writing to a String cannot fail.
        let _ = write!(summary, "  Revenue: ${}", format_cents(self.revenue_cents));
        if let Some(target) = self.target_cents {
            let _ = write!(summary, " (target ${})", format_cents(target));
        }
        let _ = writeln!(summary);

        let peaks: Vec<String> = self.peak_days.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            summary,
            "  Peak days: {}",
            if peaks.is_empty() {
                "none".to_string()
            } else {
                peaks.join(", ")
            }
        );

        if let (Some(peak), Some(off)) =
            (self.peak_average_revenue(), self.off_peak_average_revenue())
        {
            let _ = writeln!(
                summary,
                "  Average day: ${} peak | ${} off-peak",
                format_cents(peak),
                format_cents(off)
            );
        }
        if let (Some(peak), Some(off)) = (self.average_lines(true), self.average_lines(false)) {
            let _ = writeln!(
                summary,
                "  Lines per order: {peak:.2} peak | {off:.2} off-peak"
            );
        }
        let _ = writeln!(summary, "  Stock movements: {}", self.stock_movements);

        summary
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::distributor::Distributor;
    use crate::test_utils::{date, seeded_rng, two_item_menu, week_generator_config};

    fn week_summary() -> RunSummary {
        let config = week_generator_config();
        let menu = two_item_menu();
        let distributor = Distributor::new(&config, &menu).unwrap();
        let distribution = distributor.run(&mut seeded_rng(config.seed));
        RunSummary::new(&config, distributor.range(), &distribution, 0)
    }

    #[test]
    fn test_summary_totals() {
        let summary = week_summary();
        assert_eq!(summary.days, 7);
        assert_eq!(summary.daily.len(), 7);
        assert_eq!(summary.revenue_cents, 70_000);
        assert_eq!(summary.target_cents, Some(70_000));
        assert_eq!(summary.peak_days.len(), 1);
        assert_eq!(summary.daily.iter().map(|d| d.orders).sum::<usize>(), summary.orders);
        assert_eq!(summary.daily.iter().map(|d| d.lines).sum::<usize>(), summary.lines);
        assert_eq!(summary.daily[0].date, date(2024, 1, 1));
        assert!(summary.daily.iter().all(|d| d.target_cents == Some(d.revenue_cents)));
    }

    #[test]
    fn test_peak_day_stands_out() {
        let summary = week_summary();
        assert!(summary.peak_average_revenue().unwrap() > summary.off_peak_average_revenue().unwrap());
        assert!(summary.average_lines(true).unwrap() > summary.average_lines(false).unwrap());
    }

    #[test]
    fn test_averages_without_peaks() {
        let config = GeneratorConfig {
            peak_days: 0,
            ..week_generator_config()
        };
        let menu = two_item_menu();
        let distributor = Distributor::new(&config, &menu).unwrap();
        let distribution = distributor.run(&mut seeded_rng(1));
        let summary = RunSummary::new(&config, distributor.range(), &distribution, 0);

        assert!(summary.peak_average_revenue().is_none());
        assert!(summary.average_lines(true).is_none());
        assert!(summary.off_peak_average_revenue().is_some());
    }

    #[test]
    fn test_format_summary() {
        let summary = week_summary();
        let text = summary.format_summary();
        assert!(text.starts_with("Seed 7 (target) - 7 days"));
        assert!(text.contains("Revenue: $700.00 (target $700.00)"));
        assert!(text.contains("Peak days: 2024-01-0"));
        assert!(text.contains("off-peak"));
    }
}
