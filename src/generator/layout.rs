//! Pin placement for one bank.
//!
//! Signals are stacked top to bottom on a 100 mil pitch, centred on the X
//! axis. All balls of one net share a row. Pins sit on the right edge of the
//! body and point left into it.

use indexmap::IndexMap;

use super::sort::PinRole;
use crate::kicad::{Pin, PinElectricalType, PinOrientation, Rectangle, Unit};

/// Vertical distance between adjacent nets.
pub const PITCH: i32 = 100;

/// Pin stub length.
pub const PIN_LENGTH: i32 = 200;

/// X of every pin's connection point.
pub const PIN_X: i32 = 200;

/// Body width allowance per character of the longest signal name.
pub const CHAR_WIDTH: i32 = 50;

/// Extra body width on top of the name allowance.
pub const BODY_MARGIN: i32 = 50;

/// Places the pins of one bank and computes its outline.
///
/// `order` lists the distinct signals top to bottom; `nets` maps each signal
/// to its balls. The first ball of a net is the visible pin.
#[must_use]
pub fn layout_unit(
    index: u32,
    bank: &str,
    order: &[&str],
    nets: &IndexMap<&str, Vec<&str>>,
) -> Unit {
    let y_start = row_start(order.len());
    let mut y = y_start;
    let mut pins = Vec::new();

    for &name in order {
        let electrical_type = PinElectricalType::from(PinRole::classify(name));
        let balls = nets.get(name).map_or(&[][..], Vec::as_slice);

        for (i, ball) in balls.iter().enumerate() {
            pins.push(Pin {
                name: name.to_string(),
                number: (*ball).to_string(),
                x: PIN_X,
                y,
                length: PIN_LENGTH,
                orientation: PinOrientation::Left,
                electrical_type,
                unit: index,
                hidden: i > 0,
            });
        }
        y -= PITCH;
    }

    let longest = order.iter().map(|name| name.chars().count()).max().unwrap_or(0);
    let width = i32::try_from(longest)
        .unwrap_or(i32::MAX / CHAR_WIDTH)
        .saturating_mul(CHAR_WIDTH)
        .saturating_add(BODY_MARGIN);

    Unit {
        index,
        bank: bank.to_string(),
        pins,
        outline: Rectangle::new(-width, y_start + PITCH, 0, y, index),
    }
}

/// Y of the first row for `count` rows: `floor(count / 2)` pitches above zero.
#[must_use]
pub fn row_start(count: usize) -> i32 {
    i32::try_from(count / 2)
        .unwrap_or(i32::MAX / PITCH)
        .saturating_mul(PITCH)
}
