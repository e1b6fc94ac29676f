//! Currency arithmetic on integer cents.
//!
//! Amounts enter and leave the system as dollars (`f64`, as stored in the
//! entities) but every sum, split and comparison happens on `i64` cents so
//! totals reconcile exactly.

/// Converts a dollar amount to whole cents, rounding half away from zero.
#[must_use]
pub fn to_cents(amount: f64) -> i64 {
    // Cast safety: amounts are validated finite and far below i64::MAX cents.
    #[allow(clippy::cast_possible_truncation)]
    let cents = (amount * 100.0).round() as i64;
    cents
}

/// Converts whole cents back to dollars.
#[must_use]
pub fn from_cents(cents: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let dollars = cents as f64 / 100.0;
    dollars
}

/// Formats cents as a plain two-decimal dollar string, e.g. `"1234.05"`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Loyalty points earned by an order: `floor(total / divisor)` whole dollars.
///
/// Non-positive totals earn nothing. `divisor` is validated non-zero upstream;
/// a zero divisor also earns nothing rather than dividing by zero.
#[must_use]
pub fn loyalty_points(total_cents: i64, divisor: u32) -> i64 {
    if total_cents <= 0 || divisor == 0 {
        return 0;
    }
    total_cents / (i64::from(divisor) * 100)
}

/// Splits `total` cents into shares proportional to `weights`.
///
/// Shares are non-negative and sum exactly to `total`. Rounding is applied to
/// cumulative boundaries, so no share drifts by more than one cent from its
/// exact proportion. When every weight is zero the split is equal.
#[must_use]
pub fn apportion(total: i64, weights: &[f64]) -> Vec<i64> {
    if weights.is_empty() {
        return Vec::new();
    }
    if total < 0 {
        return apportion(-total, weights).into_iter().map(|s| -s).collect();
    }

    let positive: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 0.0 })
        .collect();
    let sum: f64 = positive.iter().sum();
    let equal = sum <= 0.0;
    #[allow(clippy::cast_precision_loss)]
    let (sum, total_f) = (if equal { positive.len() as f64 } else { sum }, total as f64);

    let mut shares = Vec::with_capacity(positive.len());
    let mut cumulative = 0.0;
    let mut allocated = 0;
    for (index, weight) in positive.iter().enumerate() {
        cumulative += if equal { 1.0 } else { *weight };
        let boundary = if index + 1 == positive.len() {
            total
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let rounded = (total_f * cumulative / sum).round() as i64;
            rounded.clamp(allocated, total)
        };
        shares.push(boundary - allocated);
        allocated = boundary;
    }
    shares
}
