//! Signal ordering within a bank.
//!
//! Signals are laid out in three groups: supplies (`VCC*`) first in plain
//! lexicographic order, then every other signal in natural order (`PL9A`
//! before `PL10A`), then `GND` last.

use std::cmp::Ordering;

/// Electrical role of a signal, derived from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    /// Supply or ground (`GND`, `VCC*`).
    Power,
    /// Vendor-reserved pin (`RESERVED`).
    Reserved,
    /// Any other signal.
    Signal,
}

impl PinRole {
    /// Classifies a signal name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        if is_ground(name) || is_supply(name) {
            Self::Power
        } else if name == "RESERVED" {
            Self::Reserved
        } else {
            Self::Signal
        }
    }
}

fn is_ground(name: &str) -> bool {
    name == "GND"
}

fn is_supply(name: &str) -> bool {
    name.starts_with("VCC")
}

/// Layout group, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortGroup {
    /// `VCC*` supplies.
    Supply,
    /// Everything else.
    Other,
    /// `GND`, kept apart only when ground goes last.
    Ground,
}

impl SortGroup {
    /// Returns the group for `name`.
    ///
    /// With `ground_last` unset, `GND` sorts among the other signals.
    #[must_use]
    pub fn of(name: &str, ground_last: bool) -> Self {
        if is_supply(name) {
            Self::Supply
        } else if ground_last && is_ground(name) {
            Self::Ground
        } else {
            Self::Other
        }
    }
}

/// Natural-order key: leading text, first digit run by magnitude, then the rest.
///
/// Names that differ only in zero padding of the digit run (`IO01`, `IO1`)
/// have equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalKey<'a> {
    head: &'a str,
    /// Digit run with leading zeros trimmed.
    number: Option<&'a str>,
    suffix: &'a str,
}

impl<'a> NaturalKey<'a> {
    /// Splits `name` into its key parts.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        let digits_at = name.find(|c: char| c.is_ascii_digit());
        let Some(start) = digits_at else {
            return Self {
                head: name,
                number: None,
                suffix: "",
            };
        };

        let rest = &name[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        Self {
            head: &name[..start],
            number: Some(rest[..end].trim_start_matches('0')),
            suffix: &rest[end..],
        }
    }

    /// Head bytes, followed by `0` if a number comes next so that the
    /// boundary between text and digits orders like the digit itself would.
    fn head_bytes(&self) -> impl Iterator<Item = u8> + 'a {
        self.head
            .bytes()
            .chain(self.number.map(|_| b'0'))
    }
}

impl Ord for NaturalKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head_bytes()
            .cmp(other.head_bytes())
            .then_with(|| match (self.number, other.number) {
                (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
                (a, b) => a.is_some().cmp(&b.is_some()),
            })
            .then_with(|| self.suffix.cmp(other.suffix))
    }
}

impl PartialOrd for NaturalKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two signal names in natural order.
///
/// This is not a strict total order over strings: zero-padded digit runs tie
/// (`natural_cmp("IO01", "IO1") == Equal`).
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

/// Full ordering key for one signal: group, natural key, then the raw name
/// so that natural ties still sort deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey<'a> {
    group: SortGroup,
    /// `None` for supplies, which sort lexicographically on `name` alone.
    natural: Option<NaturalKey<'a>>,
    name: &'a str,
}

impl<'a> SortKey<'a> {
    /// Builds the key for `name`.
    #[must_use]
    pub fn new(name: &'a str, ground_last: bool) -> Self {
        let group = SortGroup::of(name, ground_last);
        let natural = (group != SortGroup::Supply).then(|| NaturalKey::new(name));
        Self {
            group,
            natural,
            name,
        }
    }
}

/// Orders the distinct signal names of one bank for layout.
#[must_use]
pub fn sort_signals<'a, I>(names: I, ground_last: bool) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names: Vec<&'a str> = names.into_iter().collect();
    names.sort_by_key(|&name| SortKey::new(name, ground_last));
    names
}
