//! Record boundaries in a buffer of ISO 2709 records.
//!
//! Boundaries are found by scanning for the record terminator (0x1D) with
//! `memchr`, without reading leaders, so a record with a damaged length
//! field does not shift every record after it.
//!
//! # Example
//!
//! ```
//! use marcqa::boundary_scanner::scan;
//!
//! let data = [b'a', b'b', 0x1D, b'c', 0x1D, b'd'];
//! let boundaries = scan(&data);
//!
//! assert_eq!(boundaries.records, vec![0..3, 3..5]);
//! assert_eq!(boundaries.trailing, Some(5..6));
//! ```

use crate::iso2709::RECORD_TERMINATOR;
use memchr::memchr_iter;
use std::ops::Range;

/// Result of a boundary scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Boundaries {
    /// Byte range of each terminated record, terminator included
    pub records: Vec<Range<usize>>,
    /// Bytes after the last terminator, when they are not just whitespace
    pub trailing: Option<Range<usize>>,
}

impl Boundaries {
    /// Number of terminated records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no terminated record was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Find record boundaries in `buffer`.
#[must_use]
pub fn scan(buffer: &[u8]) -> Boundaries {
    let mut records = Vec::with_capacity(buffer.len() / 1024 + 1);
    let mut start = 0;
    for terminator in memchr_iter(RECORD_TERMINATOR, buffer) {
        records.push(start..terminator + 1);
        start = terminator + 1;
    }

    // Exports often end with a newline after the last record.
    let trailing = (!buffer[start..].iter().all(u8::is_ascii_whitespace))
        .then_some(start..buffer.len());

    Boundaries { records, trailing }
}

/// Number of terminated records in `buffer`.
#[must_use]
pub fn count_records(buffer: &[u8]) -> usize {
    memchr_iter(RECORD_TERMINATOR, buffer).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_multiple_records() {
        let data = [1, 2, 0x1D, 3, 4, 0x1D, 5, 0x1D];
        let boundaries = scan(&data);
        assert_eq!(boundaries.records, vec![0..3, 3..6, 6..8]);
        assert_eq!(boundaries.trailing, None);
        assert_eq!(boundaries.len(), 3);
    }

    #[test]
    fn test_empty_buffer() {
        let boundaries = scan(&[]);
        assert!(boundaries.is_empty());
        assert_eq!(boundaries.trailing, None);
    }

    #[test]
    fn test_unterminated_data() {
        let boundaries = scan(&[1, 2, 3]);
        assert!(boundaries.is_empty());
        assert_eq!(boundaries.trailing, Some(0..3));
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let boundaries = scan(&[1, 0x1D, b'\n', b'\r', b'\n']);
        assert_eq!(boundaries.records, vec![0..2]);
        assert_eq!(boundaries.trailing, None);
    }

    #[test]
    fn test_count_records() {
        assert_eq!(count_records(&[1, 0x1D, 2, 0x1D, 3, 4]), 2);
        assert_eq!(count_records(&[]), 0);
    }

    #[test]
    fn test_many_records() {
        let data: Vec<u8> = (0..1000).flat_map(|i| [if i % 2 == 0 { 1 } else { 2 }, 0x1D]).collect();
        let boundaries = scan(&data);
        assert_eq!(boundaries.len(), 1000);
        assert_eq!(boundaries.records[999], 1998..2000);
    }
}
