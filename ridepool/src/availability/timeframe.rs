//! Daily shift windows and the editable horizon.

use crate::interval::{Interval, UnixtimeMs};

/// One minute in milliseconds.
pub const MINUTE_MS: i64 = 60 * 1000;
/// One hour in milliseconds.
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
/// One day in milliseconds.
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// The daily shift windows touching `[earliest, latest)`.
///
/// For every UTC day from the one containing `earliest` to the one
/// containing `latest`, yields `[day + start_on_day, day + end_on_day)`.
/// The windows are not clipped to `[earliest, latest)`; intersect them with
/// the wanted range. Returns nothing if `earliest >= latest` or the daily
/// offsets are not ordered.
///
/// # Examples
///
/// ```
/// use ridepool::availability::{allowed_times, DAY_MS, HOUR_MS};
///
/// let days = allowed_times(0, DAY_MS + 1, 6 * HOUR_MS, 21 * HOUR_MS);
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[1].start_time(), DAY_MS + 6 * HOUR_MS);
/// ```
#[must_use]
pub fn allowed_times(
    earliest: UnixtimeMs,
    latest: UnixtimeMs,
    start_on_day: i64,
    end_on_day: i64,
) -> Vec<Interval> {
    if earliest >= latest {
        return Vec::new();
    }

    let first_day = earliest.div_euclid(DAY_MS);
    let last_day = latest.div_euclid(DAY_MS);
    (first_day..=last_day)
        .filter_map(|day| {
            let midnight = day * DAY_MS;
            Interval::new(midnight + start_on_day, midnight + end_on_day).ok()
        })
        .collect()
}

/// The part of the timeline whose availability may still be changed at
/// `now`: everything from `now + min_prep` on.
#[must_use]
pub fn alterable_timeframe(now: UnixtimeMs, min_prep: i64) -> Interval {
    let start = now.saturating_add(min_prep.max(0)).min(UnixtimeMs::MAX - 1);
    Interval::from_ordered(start, UnixtimeMs::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_day() {
        let times = allowed_times(HOUR_MS, 2 * HOUR_MS, 5 * HOUR_MS, 22 * HOUR_MS);
        assert_eq!(
            times,
            vec![Interval::new(5 * HOUR_MS, 22 * HOUR_MS).unwrap()]
        );
    }

    #[test]
    fn test_spans_three_days() {
        let times = allowed_times(
            DAY_MS + 23 * HOUR_MS,
            3 * DAY_MS + HOUR_MS,
            5 * HOUR_MS,
            22 * HOUR_MS,
        );
        let starts: Vec<i64> = times.iter().map(Interval::start_time).collect();
        assert_eq!(
            starts,
            vec![
                DAY_MS + 5 * HOUR_MS,
                2 * DAY_MS + 5 * HOUR_MS,
                3 * DAY_MS + 5 * HOUR_MS
            ]
        );
    }

    #[test]
    fn test_empty_range_or_bad_offsets() {
        assert!(allowed_times(10, 10, 0, HOUR_MS).is_empty());
        assert!(allowed_times(10, 5, 0, HOUR_MS).is_empty());
        assert!(allowed_times(0, DAY_MS, 2 * HOUR_MS, HOUR_MS).is_empty());
    }

    #[test]
    fn test_before_epoch_rounds_down() {
        let times = allowed_times(-HOUR_MS, -1, 0, HOUR_MS);
        assert_eq!(times, vec![Interval::new(-DAY_MS, -DAY_MS + HOUR_MS).unwrap()]);
    }

    #[test]
    fn test_alterable_timeframe() {
        let frame = alterable_timeframe(1_000, HOUR_MS);
        assert_eq!(frame.start_time(), 1_000 + HOUR_MS);
        assert!(frame.covers(i64::MAX - 1));

        let far = alterable_timeframe(i64::MAX - 5, HOUR_MS);
        assert!(far.start_time() < far.end_time());
    }
}
