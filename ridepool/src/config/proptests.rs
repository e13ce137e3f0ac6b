//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, ShiftConfig, MINUTES_PER_DAY};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn shift_strategy() -> impl Strategy<Value = ShiftConfig> {
    (0..MINUTES_PER_DAY).prop_flat_map(|start| {
        (start + 1..=MINUTES_PER_DAY).prop_map(move |end| ShiftConfig {
            earliest_start_minutes: start,
            latest_end_minutes: end,
        })
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(1u64..600),
        prop::option::of(0i64..24 * 60),
        prop::option::of(shift_strategy()),
        prop::option::of(prop_oneof![
            Just(OutputFormat::Json),
            Just(OutputFormat::Csv),
            Just(OutputFormat::Tsv),
            Just(OutputFormat::Table),
        ]),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(lock, prep, shift, output_format, autoinit)| Config {
            maximum_lock_wait_seconds: lock,
            min_prep_minutes: prep,
            shift,
            output_format,
            disable_autoinit: autoinit,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher layer always win; unset ones never erase
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.maximum_lock_wait_seconds, high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds));
        prop_assert_eq!(merged.min_prep_minutes, high.min_prep_minutes.or(low.min_prep_minutes));
        prop_assert_eq!(merged.shift, high.shift.or(low.shift));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    // Merging valid layers yields a valid configuration
    #[test]
    fn config_merge_preserves_validity(low in config_strategy(), high in config_strategy()) {
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // Valid shifts always give a non-empty window inside the day
    #[test]
    fn shift_bounds_are_ordered(shift in shift_strategy()) {
        let config = Config { shift: Some(shift), ..Default::default() };
        let (start, end) = config.shift_bounds_ms();
        prop_assert!(0 <= start && start < end);
        prop_assert!(end <= i64::from(MINUTES_PER_DAY) * 60_000);
    }
}
