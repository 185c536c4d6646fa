/// The two families of byte prefixes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UnitSystem {
    /// Decimal prefixes (kB, MB, ...), base 1000.
    SI,
    /// IEC binary prefixes (KiB, MiB, ...), base 1024.
    Binary,
}

impl UnitSystem {
    pub const fn base(&self) -> u64 {
        match self {
            Self::SI => 1000,
            Self::Binary => 1024,
        }
    }

    /// `base^exponent`, or `None` if it does not fit in a `u64`.
    pub const fn factor(&self, exponent: u32) -> Option<u64> {
        self.base().checked_pow(exponent)
    }
}
