pub mod format;
pub mod parse;
pub mod system;
pub mod units;

pub use format::{format, format_bytes, IntoByteCount};
pub use parse::parse;

const B: &str = "B";

const KB: &str = "kB";
const MB: &str = "MB";
const GB: &str = "GB";
const TB: &str = "TB";
const PB: &str = "PB";
const EB: &str = "EB";

const KIB: &str = "KiB";
const MIB: &str = "MiB";
const GIB: &str = "GiB";
const TIB: &str = "TiB";
const PIB: &str = "PiB";
const EIB: &str = "EiB";
