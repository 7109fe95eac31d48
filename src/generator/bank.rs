//! Bank partitioning and same-net merging.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Deserialize;

use super::sort::PinRole;
use crate::ballout::{Pad, ABSENT};

/// How pads without a bank (`-`) are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnassignedBank {
    /// `-` is a bank key like any other.
    #[default]
    Keep,
    /// Power pins go to a `power` bank, the rest to `misc`.
    Split,
}

impl UnassignedBank {
    fn bank_key<'a>(self, pad: &'a Pad) -> &'a str {
        match self {
            Self::Split if pad.bank == ABSENT => {
                if PinRole::classify(&pad.pin_ball) == PinRole::Power {
                    "power"
                } else {
                    "misc"
                }
            }
            _ => &pad.bank,
        }
    }
}

/// Partitions pads by bank. Keys iterate in ascending order, which is also
/// unit order: the first key is unit 1.
#[must_use]
pub fn group_banks<'a>(pads: &[&'a Pad], policy: UnassignedBank) -> BTreeMap<String, Vec<&'a Pad>> {
    let mut banks: BTreeMap<String, Vec<&'a Pad>> = BTreeMap::new();
    for &pad in pads {
        banks
            .entry(policy.bank_key(pad).to_string())
            .or_default()
            .push(pad);
    }
    banks
}

/// Collects the balls of each signal in one bank, in pad order.
///
/// Pads not bonded out in `package` are skipped.
#[must_use]
pub fn merge_nets<'a>(pads: &[&'a Pad], package: &str) -> IndexMap<&'a str, Vec<&'a str>> {
    let mut nets: IndexMap<&'a str, Vec<&'a str>> = IndexMap::new();
    for &pad in pads {
        if let Some(ball) = pad.ball(package) {
            nets.entry(pad.pin_ball.as_str()).or_default().push(ball);
        }
    }
    nets
}
