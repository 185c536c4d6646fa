use crate::bytes::{system::UnitSystem, *};

/// A byte unit: `symbol` stands for `system.base()^exponent` bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Unit {
    pub symbol: &'static str,
    pub system: UnitSystem,
    pub exponent: u32,
}

impl Unit {
    const fn new(symbol: &'static str, system: UnitSystem, exponent: u32) -> Self {
        Self {
            symbol,
            system,
            exponent,
        }
    }

    pub const BYTE: Unit = Unit::new(B, UnitSystem::SI, 0);

    /// Every unit the parser understands. IEC entries come before SI entries so
    /// that a suffix carrying the binary `i` can never fall through to base 1000.
    pub const ALL: [Unit; 13] = [
        Self::BYTE,
        Unit::new(KIB, UnitSystem::Binary, 1),
        Unit::new(MIB, UnitSystem::Binary, 2),
        Unit::new(GIB, UnitSystem::Binary, 3),
        Unit::new(TIB, UnitSystem::Binary, 4),
        Unit::new(PIB, UnitSystem::Binary, 5),
        Unit::new(EIB, UnitSystem::Binary, 6),
        Unit::new(KB, UnitSystem::SI, 1),
        Unit::new(MB, UnitSystem::SI, 2),
        Unit::new(GB, UnitSystem::SI, 3),
        Unit::new(TB, UnitSystem::SI, 4),
        Unit::new(PB, UnitSystem::SI, 5),
        Unit::new(EB, UnitSystem::SI, 6),
    ];

    /// Units emitted by the formatter, one per tier.
    pub const SI_TIERS: [Unit; 6] = [
        Self::BYTE,
        Self::ALL[7],
        Self::ALL[8],
        Self::ALL[9],
        Self::ALL[10],
        Self::ALL[11],
    ];

    pub fn factor(&self) -> u64 {
        // every entry in ALL fits in a u64
        self.system.factor(self.exponent).unwrap_or(u64::MAX)
    }

    /// Finds the unit named by `suffix`, ignoring ASCII case.
    ///
    /// The trailing `B` may be left off (`"k"`, `"Mi"`), and an empty suffix
    /// means plain bytes.
    pub fn lookup(suffix: &str) -> Option<Unit> {
        if suffix.is_empty() {
            return Some(Self::BYTE);
        }

        Self::ALL.iter().copied().find(|unit| unit.matches(suffix))
    }

    fn matches(&self, suffix: &str) -> bool {
        if suffix.eq_ignore_ascii_case(self.symbol) {
            return true;
        }
        match self.symbol.strip_suffix(B) {
            Some(prefix) if !prefix.is_empty() => suffix.eq_ignore_ascii_case(prefix),
            _ => false,
        }
    }
}
