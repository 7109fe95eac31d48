//! Ballout table to symbol conversion.
//!
//! # Pipeline
//!
//! ```text
//! BallTable ─▶ package view ─▶ banks ─▶ nets ─▶ signal order ─▶ layout ─▶ Symbol
//! ```
//!
//! Every package is converted independently; nothing is shared between
//! packages except the immutable table.

pub mod bank;
pub mod layout;
pub mod sort;

pub use bank::{group_banks, merge_nets, UnassignedBank};
pub use layout::layout_unit;
pub use sort::{natural_cmp, sort_signals, NaturalKey, PinRole, SortGroup, SortKey};

use tracing::{debug, info};

use crate::ballout::{BallTable, BalloutResult};
use crate::kicad::Symbol;

/// Knobs for the two behaviours that differ between historical revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Keep `GND` after all other signals instead of sorting it naturally.
    pub ground_last: bool,
    /// Grouping of pads without a bank.
    pub unassigned_bank: UnassignedBank,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            ground_last: true,
            unassigned_bank: UnassignedBank::Keep,
        }
    }
}

/// Builds the symbol for one package.
///
/// # Errors
///
/// Returns [`crate::ballout::BalloutError::PackageNotFound`] if `package` is
/// not a column of the table.
pub fn generate_symbol(
    table: &BallTable,
    part: &str,
    package: &str,
    options: &GeneratorOptions,
) -> BalloutResult<Symbol> {
    let package = table.resolve_package(package)?;
    let pads = table.signals_for_package(package)?;
    let banks = group_banks(&pads, options.unassigned_bank);

    info!(package, banks = banks.len(), pads = pads.len(), "Generating symbol");

    let mut symbol = Symbol::new(format!("{part}-{package}"));
    for (index, (bank, bank_pads)) in (1u32..).zip(&banks) {
        let nets = merge_nets(bank_pads, package);
        let order = sort_signals(nets.keys().copied(), options.ground_last);

        debug!(bank = %bank, unit = index, signals = order.len(), "Laying out bank");

        symbol.units.push(layout_unit(index, bank, &order, &nets));
    }

    Ok(symbol)
}

/// Builds one symbol per package, in ascending package name order.
///
/// # Errors
///
/// Never fails for packages taken from the table itself; the error path is
/// shared with [`generate_symbol`].
pub fn generate_all(
    table: &BallTable,
    part: &str,
    options: &GeneratorOptions,
) -> BalloutResult<Vec<Symbol>> {
    table
        .package_names()
        .iter()
        .map(|package| generate_symbol(table, part, package, options))
        .collect()
}
