//! Text writer for legacy KiCad symbol records.

use std::io::{self, Write};

use super::primitives::{Pin, Rectangle};
use super::Symbol;

/// Encodes a pin record.
fn encode_pin(pin: &Pin) -> String {
    let mut record = format!(
        "X {} {} {} {} {} {} 50 50 {} 1 {}",
        pin.name,
        pin.number,
        pin.x,
        pin.y,
        pin.length,
        pin.orientation.code(),
        pin.unit,
        pin.electrical_type.code(),
    );
    if pin.hidden {
        record.push_str(" N");
    }
    record
}

/// Encodes a rectangle record.
fn encode_rectangle(rect: &Rectangle) -> String {
    format!(
        "S {} {} {} {} {} 1 0 N",
        rect.x1, rect.y1, rect.x2, rect.y2, rect.unit
    )
}

/// Encodes the `DEF` header and the four field records.
fn encode_header(symbol: &Symbol) -> [String; 5] {
    [
        format!("DEF {} U 0 20 Y Y {} L N", symbol.name, symbol.unit_count()),
        "F0 \"U\" 0 0 50 H V C CNN".to_string(),
        format!("F1 \"{}\" 0 0 50 H V C CNN", symbol.name),
        "F2 \"\" 0 0 50 H I C CNN".to_string(),
        "F3 \"\" 0 0 50 H I C CNN".to_string(),
    ]
}

/// Writes one complete `DEF ... ENDDEF` block.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_symbol<W: Write>(out: &mut W, symbol: &Symbol) -> io::Result<()> {
    for line in encode_header(symbol) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "DRAW")?;

    for unit in &symbol.units {
        for pin in &unit.pins {
            writeln!(out, "{}", encode_pin(pin))?;
        }
        writeln!(out, "{}", encode_rectangle(&unit.outline))?;
    }

    writeln!(out, "ENDDRAW")?;
    writeln!(out, "ENDDEF")
}

/// Encodes one symbol block to a string.
#[must_use]
pub fn encode_symbol(symbol: &Symbol) -> String {
    let mut data = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_symbol(&mut data, symbol);
    String::from_utf8_lossy(&data).into_owned()
}
