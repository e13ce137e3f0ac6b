//! Half-open time intervals and the algebra used on availability windows.
//!
//! An [`Interval`] is `[start, end)` in Unix milliseconds with a strictly
//! positive duration. Two intervals that only share a boundary point touch
//! but do not overlap.

use std::fmt;

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[cfg(test)]
mod proptests;

/// Milliseconds since the Unix epoch.
pub type UnixtimeMs = i64;

/// How two intervals lie relative to each other, seen from `a` in
/// `a.relation(&b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalRelation {
    /// Same start and end.
    Equal,
    /// `a` contains `b` (but is not equal).
    AContainsB,
    /// `b` contains `a` (but is not equal).
    BContainsA,
    /// Proper overlap, `a` starts first.
    OverlappingAEarlier,
    /// Proper overlap, `b` starts first.
    OverlappingBEarlier,
    /// `a` ends before `b` starts, with a gap.
    ABeforeB,
    /// `b` ends before `a` starts, with a gap.
    BBeforeA,
    /// `a` ends exactly where `b` starts.
    TouchABeforeB,
    /// `b` ends exactly where `a` starts.
    TouchBBeforeA,
}

/// A half-open time range `[start_time, end_time)`.
///
/// # Examples
///
/// ```
/// use ridepool::Interval;
///
/// let shift = Interval::new(0, 100).unwrap();
/// let break_time = Interval::new(20, 30).unwrap();
///
/// assert!(shift.contains(&break_time));
/// let (before, after) = shift.split(&break_time).unwrap();
/// assert_eq!((before.start_time(), before.end_time()), (0, 20));
/// assert_eq!((after.start_time(), after.end_time()), (30, 100));
///
/// // Zero-length intervals are rejected.
/// assert!(Interval::new(5, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start_time: UnixtimeMs,
    end_time: UnixtimeMs,
}

#[derive(Deserialize)]
struct RawInterval {
    start_time: UnixtimeMs,
    end_time: UnixtimeMs,
}

impl TryFrom<RawInterval> for Interval {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.start_time, raw.end_time)
    }
}

impl Interval {
    /// Creates an interval with a strictly positive duration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `start_time >= end_time`.
    pub fn new(start_time: UnixtimeMs, end_time: UnixtimeMs) -> Result<Self> {
        if start_time >= end_time {
            return Err(Error::InvalidInterval {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            start_time,
            end_time,
        })
    }

    /// Constructor for algebra results whose bounds are ordered by the caller.
    pub(crate) const fn from_ordered(start_time: UnixtimeMs, end_time: UnixtimeMs) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Inclusive start.
    #[must_use]
    pub const fn start_time(&self) -> UnixtimeMs {
        self.start_time
    }

    /// Exclusive end.
    #[must_use]
    pub const fn end_time(&self) -> UnixtimeMs {
        self.end_time
    }

    /// Length in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Returns `true` if the two intervals share more than a boundary point.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// Returns `true` if one interval ends exactly where the other starts.
    #[must_use]
    pub const fn touches(&self, other: &Self) -> bool {
        self.start_time == other.end_time || self.end_time == other.start_time
    }

    /// Returns `true` if the two intervals can be merged without a gap.
    #[must_use]
    pub const fn is_mergeable(&self, other: &Self) -> bool {
        self.overlaps(other) || self.touches(other)
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start_time <= other.start_time && other.end_time <= self.end_time
    }

    /// Returns `true` if the intervals share their start or their end.
    #[must_use]
    pub const fn either_end_is_equal(&self, other: &Self) -> bool {
        self.start_time == other.start_time || self.end_time == other.end_time
    }

    /// Returns `true` if `time` lies within the interval, both ends included.
    #[must_use]
    pub const fn covers(&self, time: UnixtimeMs) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    /// The overlap of two intervals, or `None` if they merely touch or are
    /// disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        self.overlaps(other).then(|| {
            Self::from_ordered(
                self.start_time.max(other.start_time),
                self.end_time.min(other.end_time),
            )
        })
    }

    /// The part of `self` left after removing the one-sided overlap with
    /// `cutter`.
    ///
    /// If `self` starts before `cutter`, the left remainder is kept,
    /// otherwise the right one. Returns `None` when the overlap is not
    /// one-sided: the intervals are disjoint, `cutter` covers `self`
    /// (deletion), or `cutter` lies strictly inside `self` (see
    /// [`split`](Self::split)).
    ///
    /// ```
    /// use ridepool::Interval;
    ///
    /// let row = Interval::new(0, 100).unwrap();
    /// assert_eq!(row.cut(&Interval::new(70, 120).unwrap()), Interval::new(0, 70).ok());
    /// assert_eq!(row.cut(&Interval::new(20, 30).unwrap()), None);
    /// ```
    #[must_use]
    pub fn cut(&self, cutter: &Self) -> Option<Self> {
        if !self.overlaps(cutter) || cutter.contains(self) || self.split(cutter).is_some() {
            return None;
        }
        Some(if self.start_time < cutter.start_time {
            Self::from_ordered(self.start_time, cutter.start_time)
        } else {
            Self::from_ordered(cutter.end_time, self.end_time)
        })
    }

    /// The two pieces of `self` on either side of `splitter`, or `None`
    /// unless `splitter` lies strictly inside `self`, sharing neither end.
    #[must_use]
    pub fn split(&self, splitter: &Self) -> Option<(Self, Self)> {
        (self.contains(splitter) && !self.either_end_is_equal(splitter)).then(|| {
            (
                Self::from_ordered(self.start_time, splitter.start_time),
                Self::from_ordered(splitter.end_time, self.end_time),
            )
        })
    }

    /// The hull of two intervals.
    #[must_use]
    pub fn merge_with(&self, other: &Self) -> Self {
        Self::from_ordered(
            self.start_time.min(other.start_time),
            self.end_time.max(other.end_time),
        )
    }

    /// Widens the interval on both sides.
    #[must_use]
    pub const fn expand(&self, prepone_start: i64, postpone_end: i64) -> Self {
        Self::from_ordered(self.start_time - prepone_start, self.end_time + postpone_end)
    }

    /// Narrows the interval on both sides, or `None` if nothing would remain.
    #[must_use]
    pub fn shrink(&self, postpone_start: i64, prepone_end: i64) -> Option<Self> {
        Self::new(self.start_time + postpone_start, self.end_time - prepone_end).ok()
    }

    /// Moves the interval by `offset` milliseconds.
    #[must_use]
    pub const fn shift(&self, offset: i64) -> Self {
        Self::from_ordered(self.start_time + offset, self.end_time + offset)
    }

    /// Classifies how `self` lies relative to `other`.
    #[must_use]
    pub fn relation(&self, other: &Self) -> IntervalRelation {
        if self == other {
            IntervalRelation::Equal
        } else if other.contains(self) {
            IntervalRelation::BContainsA
        } else if self.contains(other) {
            IntervalRelation::AContainsB
        } else if self.overlaps(other) {
            if self.start_time > other.start_time {
                IntervalRelation::OverlappingBEarlier
            } else {
                IntervalRelation::OverlappingAEarlier
            }
        } else if self.touches(other) {
            if self.start_time > other.start_time {
                IntervalRelation::TouchBBeforeA
            } else {
                IntervalRelation::TouchABeforeB
            }
        } else if self.start_time > other.start_time {
            IntervalRelation::BBeforeA
        } else {
            IntervalRelation::ABeforeB
        }
    }
}

fn format_ms(ms: UnixtimeMs) -> String {
    DateTime::from_timestamp_millis(ms).map_or_else(
        || ms.to_string(),
        |dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} - {}]",
            format_ms(self.start_time),
            format_ms(self.end_time)
        )
    }
}

/// Merges overlapping and touching intervals into a minimal, start-ordered,
/// non-overlapping cover.
///
/// `merge(merge(xs)) == merge(xs)` for every input.
///
/// # Examples
///
/// ```
/// use ridepool::interval::{merge, Interval};
///
/// let merged = merge([
///     Interval::new(40, 90).unwrap(),
///     Interval::new(0, 50).unwrap(),
///     Interval::new(90, 95).unwrap(),
///     Interval::new(100, 110).unwrap(),
/// ]);
/// assert_eq!(merged, vec![Interval::new(0, 95).unwrap(), Interval::new(100, 110).unwrap()]);
/// ```
#[must_use]
pub fn merge(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_by_key(|i| (i.start_time, i.end_time));

    sorted.into_iter().fold(Vec::new(), |mut merged, next| {
        match merged.last_mut() {
            Some(current) if next.start_time <= current.end_time => {
                current.end_time = current.end_time.max(next.end_time);
            }
            _ => merged.push(next),
        }
        merged
    })
}

/// Removes every subtrahend from every minuend.
///
/// The result is start-ordered. Minuends are not merged with each other, so
/// overlapping minuends may yield overlapping pieces; run [`merge`] on the
/// result when a set is wanted.
#[must_use]
pub fn subtract_all(minuend: &[Interval], subtrahend: &[Interval]) -> Vec<Interval> {
    let cutters = merge(subtrahend.iter().copied());
    let mut sorted = minuend.to_vec();
    sorted.sort_by_key(|i| (i.start_time, i.end_time));

    let mut remaining = Vec::with_capacity(sorted.len());
    for piece in sorted {
        let first = cutters.partition_point(|c| c.end_time <= piece.start_time);
        let mut rest = Some(piece);
        for cutter in &cutters[first..] {
            let Some(current) = rest else { break };
            if cutter.start_time >= current.end_time {
                break;
            }
            if cutter.start_time > current.start_time {
                remaining.push(Interval::from_ordered(current.start_time, cutter.start_time));
            }
            rest = (cutter.end_time < current.end_time)
                .then(|| Interval::from_ordered(cutter.end_time, current.end_time));
        }
        remaining.extend(rest);
    }
    remaining
}

/// The pointwise intersection of two interval sets, start-ordered.
#[must_use]
pub fn intersect_all(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let a = merge(a.iter().copied());
    let b = merge(b.iter().copied());
    let (mut i, mut j) = (0, 0);
    let mut shared = Vec::new();
    while i < a.len() && j < b.len() {
        shared.extend(a[i].intersect(&b[j]));
        if a[i].end_time < b[j].end_time {
            i += 1;
        } else {
            j += 1;
        }
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_and_reversed() {
        assert!(Interval::new(3, 3).is_err());
        assert!(Interval::new(4, 3).is_err());
        assert!(Interval::new(3, 4).is_ok());
    }

    #[test]
    fn test_intersect() {
        assert_eq!(iv(0, 10).intersect(&iv(5, 20)), Some(iv(5, 10)));
        assert_eq!(iv(0, 10).intersect(&iv(2, 3)), Some(iv(2, 3)));
        assert_eq!(iv(0, 10).intersect(&iv(10, 20)), None);
        assert_eq!(iv(0, 10).intersect(&iv(11, 20)), None);
    }

    #[test]
    fn test_contains_and_either_end() {
        assert!(iv(0, 10).contains(&iv(0, 10)));
        assert!(iv(0, 10).contains(&iv(0, 4)));
        assert!(!iv(0, 10).contains(&iv(5, 11)));
        assert!(iv(0, 10).either_end_is_equal(&iv(0, 4)));
        assert!(iv(0, 10).either_end_is_equal(&iv(6, 10)));
        assert!(!iv(0, 10).either_end_is_equal(&iv(2, 8)));
    }

    #[test]
    fn test_cut_keeps_outside_part() {
        assert_eq!(iv(0, 100).cut(&iv(70, 120)), Some(iv(0, 70)));
        assert_eq!(iv(50, 100).cut(&iv(20, 70)), Some(iv(70, 100)));
        assert_eq!(iv(0, 100).cut(&iv(0, 30)), Some(iv(30, 100)));
        assert_eq!(iv(0, 100).cut(&iv(70, 100)), Some(iv(0, 70)));
    }

    #[test]
    fn test_cut_rejects_non_one_sided_overlap() {
        // disjoint and touching
        assert_eq!(iv(0, 10).cut(&iv(20, 30)), None);
        assert_eq!(iv(0, 10).cut(&iv(10, 30)), None);
        // covered by the cutter
        assert_eq!(iv(20, 30).cut(&iv(0, 100)), None);
        assert_eq!(iv(0, 10).cut(&iv(0, 10)), None);
        // strictly interior cutter is a split
        assert_eq!(iv(0, 100).cut(&iv(20, 30)), None);
    }

    #[test]
    fn test_split() {
        assert_eq!(iv(0, 100).split(&iv(20, 30)), Some((iv(0, 20), iv(30, 100))));
    }

    #[test]
    fn test_split_rejects_shared_end_or_outside() {
        assert_eq!(iv(0, 10).split(&iv(0, 5)), None);
        assert_eq!(iv(0, 10).split(&iv(5, 10)), None);
        assert_eq!(iv(0, 10).split(&iv(0, 10)), None);
        assert_eq!(iv(0, 10).split(&iv(5, 15)), None);
        assert_eq!(iv(0, 10).split(&iv(20, 30)), None);
    }

    #[test]
    fn test_relation() {
        assert_eq!(iv(0, 5).relation(&iv(0, 5)), IntervalRelation::Equal);
        assert_eq!(iv(0, 5).relation(&iv(1, 2)), IntervalRelation::AContainsB);
        assert_eq!(iv(1, 2).relation(&iv(0, 5)), IntervalRelation::BContainsA);
        assert_eq!(
            iv(0, 5).relation(&iv(3, 8)),
            IntervalRelation::OverlappingAEarlier
        );
        assert_eq!(
            iv(3, 8).relation(&iv(0, 5)),
            IntervalRelation::OverlappingBEarlier
        );
        assert_eq!(iv(0, 5).relation(&iv(5, 8)), IntervalRelation::TouchABeforeB);
        assert_eq!(iv(5, 8).relation(&iv(0, 5)), IntervalRelation::TouchBBeforeA);
        assert_eq!(iv(0, 4).relation(&iv(5, 8)), IntervalRelation::ABeforeB);
        assert_eq!(iv(6, 8).relation(&iv(0, 5)), IntervalRelation::BBeforeA);
    }

    #[test]
    fn test_merge_overlapping_rows() {
        assert_eq!(merge([iv(0, 50), iv(40, 90)]), vec![iv(0, 90)]);
    }

    #[test]
    fn test_merge_touching_and_gaps() {
        let merged = merge([iv(10, 20), iv(0, 10), iv(25, 30), iv(26, 27)]);
        assert_eq!(merged, vec![iv(0, 20), iv(25, 30)]);
        assert!(merge(Vec::new()).is_empty());
    }

    #[test]
    fn test_subtract_overlapping() {
        let res = subtract_all(&[iv(1, 5), iv(7, 9)], &[iv(3, 8)]);
        assert_eq!(res, vec![iv(1, 3), iv(8, 9)]);
    }

    #[test]
    fn test_subtract_touching() {
        let res = subtract_all(&[iv(1, 5), iv(7, 9)], &[iv(5, 9)]);
        assert_eq!(res, vec![iv(1, 5)]);
    }

    #[test]
    fn test_subtract_contained() {
        assert_eq!(
            subtract_all(&[iv(1, 10)], &[iv(5, 9)]),
            vec![iv(1, 5), iv(9, 10)]
        );
        assert_eq!(subtract_all(&[iv(1, 10)], &[iv(5, 10)]), vec![iv(1, 5)]);
        assert_eq!(subtract_all(&[iv(1, 10)], &[iv(1, 7)]), vec![iv(7, 10)]);
    }

    #[test]
    fn test_subtract_everything() {
        assert!(subtract_all(&[iv(1, 7)], &[iv(1, 7)]).is_empty());
        assert!(subtract_all(&[iv(1, 7)], &[iv(1, 8)]).is_empty());
    }

    #[test]
    fn test_subtract_several() {
        assert_eq!(
            subtract_all(&[iv(1, 6), iv(8, 12)], &[iv(5, 10)]),
            vec![iv(1, 5), iv(10, 12)]
        );
        assert_eq!(
            subtract_all(&[iv(1, 6)], &[iv(0, 4), iv(5, 10)]),
            vec![iv(4, 5)]
        );
    }

    #[test]
    fn test_intersect_all() {
        let res = intersect_all(&[iv(0, 10), iv(20, 30)], &[iv(5, 25), iv(28, 40)]);
        assert_eq!(res, vec![iv(5, 10), iv(20, 25), iv(28, 30)]);
    }

    #[test]
    fn test_shrink_and_expand() {
        assert_eq!(iv(0, 10).shrink(2, 3), Some(iv(2, 7)));
        assert_eq!(iv(0, 10).shrink(5, 5), None);
        assert_eq!(iv(5, 10).expand(5, 5), iv(0, 15));
        assert_eq!(iv(5, 10).shift(-5), iv(0, 5));
    }

    #[test]
    fn test_display_uses_utc_timestamps() {
        let display = iv(0, 60_000).to_string();
        assert_eq!(display, "[1970-01-01T00:00:00.000Z - 1970-01-01T00:01:00.000Z]");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Interval = serde_json::from_str(r#"{"start_time":1,"end_time":2}"#).unwrap();
        assert_eq!(ok, iv(1, 2));
        let bad = serde_json::from_str::<Interval>(r#"{"start_time":2,"end_time":2}"#);
        assert!(bad.is_err());
    }
}
