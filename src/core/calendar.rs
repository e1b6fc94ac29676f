//! Calendar helpers - the generation window, peak-day selection and the
//! time-of-day profile orders are stamped with.

use crate::errors::{Error, Result};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use std::collections::BTreeSet;
use tracing::warn;

const SECONDS_PER_DAY: u64 = 86_400;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayRange {
    /// Creates the range `[start, end]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateRange`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days, counting both ends.
    #[must_use]
    pub fn len(&self) -> usize {
        // Cast safety: end >= start is enforced by the constructor.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let days = (self.end - self.start).num_days() as usize + 1;
        days
    }

    /// Always false; a range holds at least one day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the days in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(self.len())
    }

    /// The day at `offset` days after the start.
    #[must_use]
    pub fn nth_day(&self, offset: usize) -> NaiveDate {
        self.start + Days::new(offset as u64)
    }

    /// Whether `moment` falls on one of the range's days.
    #[must_use]
    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        let day = moment.date();
        self.start <= day && day <= self.end
    }

    /// Midnight at the start of the first day.
    #[must_use]
    pub fn first_moment(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }
}

/// Picks `min(peaks, days)` distinct days uniformly at random.
pub fn select_peak_days<R: Rng>(range: &DayRange, peaks: usize, rng: &mut R) -> BTreeSet<NaiveDate> {
    let days = range.len();
    if peaks > days {
        warn!("Requested {peaks} peak days but the range only has {days}; clamping.");
    }
    let count = peaks.min(days);

    rand::seq::index::sample(rng, days, count)
        .into_iter()
        .map(|offset| range.nth_day(offset))
        .collect()
}

/// Uniform timestamp anywhere within the range, to the second.
pub fn uniform_timestamp<R: Rng>(range: &DayRange, rng: &mut R) -> NaiveDateTime {
    let span = range.len() as u64 * SECONDS_PER_DAY;
    let offset = rng.gen_range(0..span);
    // Cast safety: span is at most a few million seconds per year of range.
    #[allow(clippy::cast_possible_wrap)]
    let seconds = offset as i64;
    range.first_moment() + TimeDelta::seconds(seconds)
}

/// Relative order volume per hour of the day.
#[derive(Debug, Clone)]
pub struct HourProfile {
    index: WeightedIndex<f64>,
}

impl HourProfile {
    /// Builds a profile from 24 hourly weights.
    ///
    /// # Errors
    /// Returns a configuration error if every weight is zero or any is negative.
    pub fn new(weights: [f64; 24]) -> Result<Self> {
        let index = WeightedIndex::new(weights)
            .map_err(|e| Error::config(format!("Invalid hourly weights: {e}")))?;
        Ok(Self { index })
    }

    /// A café day: morning rush 6-9, lunch 11-13, a tapering afternoon and
    /// evening, and a trickle overnight.
    pub fn cafe() -> Result<Self> {
        let mut weights = [0.01; 24];
        for (hour, weight) in weights.iter_mut().enumerate() {
            *weight = match hour {
                6..=9 => 0.09,
                11..=13 => 0.10,
                14..=16 => 0.06,
                17..=18 => 0.04,
                19..=21 => 0.02,
                _ => 0.01,
            };
        }
        Self::new(weights)
    }

    /// A timestamp on `day` with the hour drawn from the profile and the
    /// minute and second uniform.
    pub fn timestamp_on<R: Rng>(&self, day: NaiveDate, rng: &mut R) -> NaiveDateTime {
        let hour = self.index.sample(rng) as i64;
        let minute = rng.gen_range(0..60_i64);
        let second = rng.gen_range(0..60_i64);
        day.and_time(NaiveTime::MIN) + TimeDelta::seconds(hour * 3_600 + minute * 60 + second)
    }
}
