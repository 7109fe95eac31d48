//! Schematic symbol primitive types for legacy KiCad `.lib` symbols.
//!
//! Coordinates are in mils (1/1000 inch), Y up.

use crate::generator::sort::PinRole;

/// A symbol pin (`X` record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    /// Pin name (signal, e.g. "PL2A", "VCCIO0").
    pub name: String,
    /// Pin number (ball designator, e.g. "A1").
    pub number: String,
    /// X position of the connection point.
    pub x: i32,
    /// Y position of the connection point.
    pub y: i32,
    /// Pin length.
    pub length: i32,
    /// Direction the pin points from its connection point.
    pub orientation: PinOrientation,
    /// Electrical type.
    pub electrical_type: PinElectricalType,
    /// Owning unit (1-based).
    pub unit: u32,
    /// Hidden pin; used for extra balls stacked under one net.
    pub hidden: bool,
}

/// Pin orientation (direction the pin points).
///
/// Pins sit on the right edge of a unit body, so they all point left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOrientation {
    /// Pin points left (connection on right side).
    Left,
}

impl PinOrientation {
    /// Returns the orientation letter used in `X` records.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Left => 'L',
        }
    }
}

/// Pin electrical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinElectricalType {
    /// Bidirectional pin (input/output).
    Bidirectional,
    /// Unspecified.
    Unspecified,
    /// Power input.
    Power,
}

impl PinElectricalType {
    /// Returns the type letter used in `X` records.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Bidirectional => 'B',
            Self::Unspecified => 'U',
            Self::Power => 'W',
        }
    }
}

impl From<PinRole> for PinElectricalType {
    fn from(role: PinRole) -> Self {
        match role {
            PinRole::Power => Self::Power,
            PinRole::Reserved => Self::Unspecified,
            PinRole::Signal => Self::Bidirectional,
        }
    }
}

/// A rectangle shape (`S` record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    /// First corner X.
    pub x1: i32,
    /// First corner Y.
    pub y1: i32,
    /// Opposite corner X.
    pub x2: i32,
    /// Opposite corner Y.
    pub y2: i32,
    /// Owning unit (1-based).
    pub unit: u32,
}

impl Rectangle {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32, unit: u32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            unit,
        }
    }

    /// Returns the vertical extent.
    #[must_use]
    pub const fn height(&self) -> i32 {
        (self.y1 - self.y2).abs()
    }
}
