use proptest::prelude::*;

pub const UNIT_SUFFIXES: [&str; 13] = [
    "B", "kB", "MB", "GB", "TB", "PB", "KiB", "MiB", "GiB", "TiB", "PiB", "k", "Mi",
];

/// A unit suffix with every letter's case chosen at random.
pub fn mixed_case_unit_strategy() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(UNIT_SUFFIXES.to_vec()), any::<u64>()).prop_map(|(unit, mask)| {
        let mixed: String = unit
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if mask >> (i % 64) & 1 == 1 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        (unit.to_string(), mixed)
    })
}

/// A decimal magnitude small enough that any unit keeps it inside a `u64`.
pub fn magnitude_strategy() -> impl Strategy<Value = String> {
    (0u32..10_000, prop::option::of(0u32..1000)).prop_map(|(int, frac)| match frac {
        Some(frac) => format!("{int}.{frac:03}"),
        None => int.to_string(),
    })
}

/// Splits `"123.46 kB"` into its magnitude and tier index.
pub fn split_formatted(formatted: &str) -> (f64, usize) {
    const TIERS: [&str; 6] = ["B", "kB", "MB", "GB", "TB", "PB"];
    let (number, unit) = formatted.split_once(' ').expect("two tokens");
    let tier = TIERS.iter().position(|t| *t == unit).expect("known tier");
    (number.parse().expect("numeric magnitude"), tier)
}
