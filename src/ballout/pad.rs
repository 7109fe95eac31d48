//! A single physical pad of the die and its ball assignment per package.

use std::fmt;

use indexmap::IndexMap;

/// Signal name used by the vendor for unconnected pads.
pub const NC: &str = "NC";

/// Marker for "no value" in bank and ballout columns.
pub const ABSENT: &str = "-";

/// Number of fixed leading columns before the per-package ballout columns.
pub const FIXED_COLUMNS: usize = 7;

/// One row of the ballout table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Pad {
    /// Pad number, unique within a table.
    pub pad_number: u32,
    /// Logical signal name (e.g., "PL2A", "VCCIO0", "GND", "NC").
    pub pin_ball: String,
    /// IO bank, or `-` when the pad has no bank.
    pub bank: String,
    /// Pad doubles as a configuration function.
    pub dual_function: bool,
    /// Differential pairing description.
    pub differential: String,
    /// Pad supports high-speed IO.
    pub high_speed: bool,
    /// DQS grouping description.
    pub dqs: String,
    /// Package name to ball designator, `-` when the pad is not bonded out.
    pub part_mapping: IndexMap<String, String>,
}

impl Pad {
    /// Returns true if the pad is marked as not connected.
    #[must_use]
    pub fn is_nc(&self) -> bool {
        self.pin_ball == NC
    }

    /// Returns the ball designator in `package`, if the pad is bonded out there.
    #[must_use]
    pub fn ball(&self, package: &str) -> Option<&str> {
        self.part_mapping
            .get(package)
            .map(String::as_str)
            .filter(|ball| *ball != ABSENT)
    }
}

impl fmt::Display for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pad {}:", self.pad_number)?;
        writeln!(f, "   pin_ball({})", self.pin_ball)?;
        writeln!(f, "   bank({})", self.bank)?;
        writeln!(f, "   dual_function({})", self.dual_function)?;
        writeln!(f, "   differential({})", self.differential)?;
        writeln!(f, "   high_speed({})", self.high_speed)?;
        writeln!(f, "   dqs({})", self.dqs)?;
        let packages: Vec<String> = self
            .part_mapping
            .iter()
            .map(|(package, ball)| format!("{package}={ball}"))
            .collect();
        write!(f, "   packages({})", packages.join(","))
    }
}
