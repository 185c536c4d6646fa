use bytes2human::{format, parse, ParseError};
use proptest::{prelude::*, test_runner::Config};

use super::strategies::{magnitude_strategy, mixed_case_unit_strategy, split_formatted};

proptest! {
    #![proptest_config(Config {
        failure_persistence: None,
        ..Config::default()
    })]

    #[test]
    fn test_unitless_numbers_are_bytes(n in any::<u64>()) {
        prop_assert_eq!(parse(&n.to_string()), Ok(n));
    }

    #[test]
    fn test_round_trip_within_one_percent(n in 100u64..) {
        let formatted = format(n).unwrap();
        let back = parse(&formatted).unwrap();
        let diff = (back as i128 - n as i128).unsigned_abs();
        prop_assert!(diff * 100 <= n as u128, "{} -> {} -> {}", n, formatted, back);
    }

    #[test]
    fn test_format_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (lo_value, lo_tier) = split_formatted(&format(lo).unwrap());
        let (hi_value, hi_tier) = split_formatted(&format(hi).unwrap());

        prop_assert!(lo_tier <= hi_tier);
        if lo_tier == hi_tier {
            prop_assert!(lo_value <= hi_value);
        }
    }

    #[test]
    fn test_units_are_case_insensitive(
        magnitude in magnitude_strategy(),
        (unit, mixed) in mixed_case_unit_strategy(),
    ) {
        let canonical = parse(&format!("{magnitude}{unit}"));
        prop_assert!(canonical.is_ok());
        prop_assert_eq!(parse(&format!("{magnitude} {mixed}")), canonical);
    }

    #[test]
    fn test_negative_sizes_are_rejected(
        magnitude in magnitude_strategy(),
        (unit, _) in mixed_case_unit_strategy(),
    ) {
        let result = parse(&format!("-{magnitude}{unit}"));
        prop_assert!(matches!(result, Err(ParseError::Negative(_))));
    }

    #[test]
    fn test_format_always_has_two_decimals(n in any::<u64>()) {
        let formatted = format(n).unwrap();
        let (number, _) = formatted.split_once(' ').unwrap();
        let (_, decimals) = number.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }
}
