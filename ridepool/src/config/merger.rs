//! Configuration merging.

use crate::config::schema::Config;

/// Layers one configuration over another.
///
/// # Examples
///
/// ```
/// use ridepool::config::{Config, ConfigMerger};
///
/// let mut result = Config { min_prep_minutes: Some(60), ..Default::default() };
/// let high = Config { min_prep_minutes: Some(15), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.min_prep_minutes, Some(15));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` into `target`; every field set in `source` wins.
    ///
    /// The shift window is replaced as a whole so a start from one layer is
    /// never paired with an end from another.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }
        if source.min_prep_minutes.is_some() {
            target.min_prep_minutes = source.min_prep_minutes;
        }
        if source.shift.is_some() {
            target.shift = source.shift;
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
