//! Vendor ballout table parsing.
//!
//! # File Format
//!
//! Lattice publishes package pinouts as comma-separated tables:
//!
//! ```text
//! # Free-text comments, any number of rows
//! ,,,,,,,,                      <- fully blank delimiter row
//! PAD,Pin/Ball Function,Bank,Dual Function,Differential,High Speed,DQS,CABGA256,CSFBGA285
//! 1,PL2A,7,,True_OF_PL2B,TRUE,-,C1,-
//! 2,PL2B,7,,Comp_OF_PL2A,TRUE,-,B1,B2
//! ```
//!
//! The first seven columns are fixed. Every column after them names a package
//! variant and holds the ball designator of the pad in that package, or `-`
//! when the pad is not bonded out.

pub mod error;
pub mod pad;

pub use error::{BalloutError, BalloutResult};
pub use pad::{Pad, ABSENT, FIXED_COLUMNS, NC};

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

/// A parsed ballout table. Immutable once built.
#[derive(Debug, Default)]
pub struct BallTable {
    /// Package names in header order.
    packages: Vec<String>,
    /// Pads keyed by pad number, in table order.
    pads: IndexMap<u32, Pad>,
}

impl BallTable {
    /// Opens and parses a ballout CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> BalloutResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| BalloutError::file_read(path, e))?;
        Self::parse(&text)
    }

    /// Parses a ballout table from CSV text.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter or header row is missing, a data row
    /// does not match the header width, or a pad number is not an integer.
    pub fn parse(text: &str) -> BalloutResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut cursor = LineCursor::new(text);

        let header = read_header(&mut reader, &cursor)?;
        let width = header.len();

        // Header columns without a name carry no package.
        let columns: Vec<(usize, String)> = header
            .iter()
            .enumerate()
            .skip(FIXED_COLUMNS)
            .map(|(i, name)| (i, name.trim().to_string()))
            .filter(|(_, name)| !name.is_empty())
            .collect();
        let packages: Vec<String> = columns.iter().map(|(_, name)| name.clone()).collect();

        let mut pads = IndexMap::new();
        let mut record = csv::StringRecord::new();
        while reader.read_record(&mut record)? {
            let start = record
                .position()
                .map_or(0, |pos| cursor.record_start(pos));
            let line = cursor.line_at(start);
            let pad = parse_pad(&record, &columns, width, line)?;
            if let Some(previous) = pads.insert(pad.pad_number, pad) {
                debug!(
                    pad_number = previous.pad_number,
                    line, "Duplicate pad number, later row wins"
                );
            }
        }

        debug!(
            packages = packages.len(),
            pads = pads.len(),
            "Parsed ballout table"
        );

        Ok(Self { packages, pads })
    }

    /// Returns all pads in table order.
    pub fn pads(&self) -> impl Iterator<Item = &Pad> {
        self.pads.values()
    }

    /// Returns the number of pads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    /// Returns true if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    /// Returns package names in header order.
    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Returns the set of package names.
    #[must_use]
    pub fn package_names(&self) -> BTreeSet<String> {
        self.packages.iter().cloned().collect()
    }

    /// Finds the header column for `name`.
    ///
    /// Exact matches win; otherwise the upper-cased name is tried, since
    /// vendor tables use upper-case package names.
    ///
    /// # Errors
    ///
    /// Returns [`BalloutError::PackageNotFound`] if neither form is a column.
    pub fn resolve_package(&self, name: &str) -> BalloutResult<&str> {
        let upper = name.to_uppercase();
        self.packages
            .iter()
            .find(|p| p.as_str() == name)
            .or_else(|| self.packages.iter().find(|p| **p == upper))
            .map(String::as_str)
            .ok_or_else(|| BalloutError::package_not_found(name))
    }

    /// Returns the pads bonded out in `package`, excluding `NC` pads, in table order.
    ///
    /// # Errors
    ///
    /// Returns [`BalloutError::PackageNotFound`] if the package is unknown.
    pub fn signals_for_package(&self, package: &str) -> BalloutResult<Vec<&Pad>> {
        let package = self.resolve_package(package)?;
        Ok(self
            .pads
            .values()
            .filter(|pad| !pad.is_nc() && pad.ball(package).is_some())
            .collect())
    }
}

/// Reads past the comment block and returns the header row.
///
/// The comment block ends at the first record whose fields are all empty, or
/// at an empty line. The reader drops empty lines without a trace, so those
/// are found in the source text instead.
fn read_header(
    reader: &mut csv::Reader<&[u8]>,
    cursor: &LineCursor<'_>,
) -> BalloutResult<csv::StringRecord> {
    let mut record = csv::StringRecord::new();
    let mut delimited = false;

    while reader.read_record(&mut record)? {
        let start = record
            .position()
            .map_or(0, |pos| cursor.record_start(pos));
        if delimited || cursor.follows_empty_line(start) {
            return Ok(record);
        }
        delimited = record.iter().all(|field| field.trim().is_empty());
    }

    Err(BalloutError::missing_header(if delimited {
        "nothing follows the blank delimiter row"
    } else {
        "no fully blank delimiter row"
    }))
}

/// Maps record positions back to the source text.
///
/// Records are stamped with the reader position from before any skipped
/// empty lines, so the real start lies past the line terminators found there.
struct LineCursor<'t> {
    text: &'t [u8],
    offset: usize,
    line: u64,
}

impl<'t> LineCursor<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text: text.as_bytes(),
            offset: 0,
            line: 1,
        }
    }

    /// Byte offset of the first character of a record stamped at `pos`.
    fn record_start(&self, pos: &csv::Position) -> usize {
        let from = usize::try_from(pos.byte())
            .unwrap_or(usize::MAX)
            .min(self.text.len());
        from + self.text[from..]
            .iter()
            .take_while(|b| matches!(b, b'\r' | b'\n'))
            .count()
    }

    /// 1-based line of `offset`. Offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> u64 {
        let offset = offset.clamp(self.offset, self.text.len());
        let newlines = self.text[self.offset..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.line += newlines as u64;
        self.offset = offset;
        self.line
    }

    /// True if the line just before `offset` is empty.
    fn follows_empty_line(&self, offset: usize) -> bool {
        let before = &self.text[..offset.min(self.text.len())];
        before
            .strip_suffix(b"\n")
            .map(|rest| rest.strip_suffix(b"\r").unwrap_or(rest))
            .is_some_and(|rest| rest.is_empty() || rest.ends_with(b"\n"))
    }
}

fn parse_pad(
    record: &csv::StringRecord,
    columns: &[(usize, String)],
    width: usize,
    line: u64,
) -> BalloutResult<Pad> {
    if record.len() < width {
        return Err(BalloutError::ShortRow {
            line,
            expected: width,
            found: record.len(),
        });
    }
    if record.iter().skip(width).any(|field| !field.trim().is_empty()) {
        return Err(BalloutError::LongRow {
            line,
            expected: width,
            found: record.len(),
        });
    }

    let field = |i: usize| record.get(i).unwrap_or_default().trim();

    let pad_number = field(0)
        .parse::<u32>()
        .map_err(|_| BalloutError::InvalidPadNumber {
            line,
            value: field(0).to_string(),
        })?;

    let part_mapping = columns
        .iter()
        .map(|(i, package)| (package.clone(), field(*i).to_string()))
        .collect();

    Ok(Pad {
        pad_number,
        pin_ball: field(1).to_string(),
        bank: field(2).to_string(),
        dual_function: field(3) == "TRUE",
        differential: field(4).to_string(),
        high_speed: field(5) == "TRUE",
        dqs: field(6).to_string(),
        part_mapping,
    })
}
