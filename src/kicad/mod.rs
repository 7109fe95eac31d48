//! Legacy KiCad schematic symbol (`.lib`) output.
//!
//! # Record Format
//!
//! ```text
//! DEF <name> U 0 20 Y Y <unit count> L N
//! F0 "U" 0 0 50 H V C CNN
//! F1 "<name>" 0 0 50 H V C CNN
//! F2 "" 0 0 50 H I C CNN
//! F3 "" 0 0 50 H I C CNN
//! DRAW
//! X <name> <number> <x> <y> <length> <orientation> 50 50 <unit> 1 <type>[ N]
//! S <x1> <y1> <x2> <y2> <unit> 1 0 N
//! ENDDRAW
//! ENDDEF
//! ```
//!
//! Pin electrical types:
//! - `W`: power input
//! - `U`: unspecified
//! - `B`: bidirectional
//!
//! A trailing ` N` on a pin marks it invisible.

pub mod primitives;
pub mod writer;

pub use primitives::*;

/// A multi-unit schematic symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Symbol name (`<part>-<package>`).
    pub name: String,
    /// Units in ascending index order.
    pub units: Vec<Unit>,
}

impl Symbol {
    /// Creates a new empty symbol.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Returns the number of units.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Returns an iterator over every pin of every unit.
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.units.iter().flat_map(|unit| unit.pins.iter())
    }
}

/// One unit of a symbol: the pins of a single IO bank and their outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Unit index (1-based).
    pub index: u32,
    /// Bank key this unit was built from.
    pub bank: String,
    /// Pins in layout order.
    pub pins: Vec<Pin>,
    /// Body outline.
    pub outline: Rectangle,
}
