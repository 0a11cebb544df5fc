//! Content grammars for subfield values.
//!
//! # Linkage (`$6`)
//!
//! `$6` connects a field with its alternate graphical representation in 880:
//! - `245 $6 880-01 $a Romanized title`
//! - `880 $6 245-01/(N $a Вернакулярное заглавие`
//!
//! The occurrence numbers match. Occurrence `00` marks an 880 with no
//! counterpart field.
//!
//! # Record control numbers
//!
//! `(OCoLC)5853149`: an optional parenthesized organization code followed by
//! the number itself.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

lazy_static! {
    // TAG-OCC[/SCRIPT][/r]
    static ref LINKAGE: Regex =
        Regex::new(r"^(\d{3})-(\d{2,3})(?:/([^/]+))?(/r)?$").expect("linkage pattern is valid");
    static ref CONTROL_NUMBER: Regex =
        Regex::new(r"^(?:\(([^()\s]+)\))?([^\s(].*)$").expect("control number pattern is valid");
    static ref PATTERNS: RwLock<HashMap<&'static str, Option<Regex>>> = RwLock::new(HashMap::new());
}

/// Information extracted from subfield `$6`.
///
/// # Examples
///
/// ```
/// use marcqa::validation::content::LinkageInfo;
///
/// let info = LinkageInfo::parse("245-01/(2/r").unwrap();
/// assert_eq!(info.tag, "245");
/// assert_eq!(info.occurrence, "01");
/// assert_eq!(info.script_id, "(2");
/// assert!(info.is_reverse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageInfo {
    /// Tag of the linked field (`880` from a regular field, the original tag
    /// from an 880)
    pub tag: String,

    /// Occurrence number shared by both fields of a pair
    pub occurrence: String,

    /// Script identification code (`(3` Arabic, `$1` CJK, `(N` Cyrillic),
    /// empty when absent
    pub script_id: String,

    /// Right-to-left orientation flag (`/r`)
    pub is_reverse: bool,
}

impl LinkageInfo {
    /// Parse a `$6` value of the form `TAG-OCC[/SCRIPT][/r]`.
    ///
    /// Returns `None` if the value does not follow the grammar. The script
    /// code is captured as written; checking it against the script code list
    /// is the validator's job.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let caps = LINKAGE.captures(value)?;
        let script_id = caps
            .get(3)
            .map(|m| m.as_str())
            .filter(|script| *script != "r")
            .unwrap_or_default()
            .to_string();
        let is_reverse = caps.get(4).is_some() || caps.get(3).is_some_and(|m| m.as_str() == "r");

        Some(LinkageInfo {
            tag: caps.get(1)?.as_str().to_string(),
            occurrence: caps.get(2)?.as_str().to_string(),
            script_id,
            is_reverse,
        })
    }

    /// Whether the occurrence number is all zeros (an 880 with no
    /// counterpart field).
    #[must_use]
    pub fn is_unlinked(&self) -> bool {
        self.occurrence.chars().all(|c| c == '0')
    }
}

/// A record control number, as carried in 035 `$a` or linking `$w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordControlNumber {
    /// MARC organization code, without parentheses
    pub organization: Option<String>,
    /// The number
    pub number: String,
}

impl RecordControlNumber {
    /// Parse `[(ORG)]NUMBER`.
    ///
    /// ```
    /// use marcqa::validation::content::RecordControlNumber;
    ///
    /// let number = RecordControlNumber::parse("(OCoLC)5853149").unwrap();
    /// assert_eq!(number.organization.as_deref(), Some("OCoLC"));
    /// assert_eq!(number.number, "5853149");
    /// assert!(RecordControlNumber::parse("(OCoLC)").is_none());
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let caps = CONTROL_NUMBER.captures(value)?;
        Some(RecordControlNumber {
            organization: caps.get(1).map(|m| m.as_str().to_string()),
            number: caps.get(2)?.as_str().to_string(),
        })
    }
}

/// Whether a value matches at least one pattern.
///
/// Patterns are compiled once per process. A pattern that fails to compile is
/// logged and never matches.
#[must_use]
pub fn matches_any(patterns: &[&'static str], value: &str) -> bool {
    patterns.iter().any(|pattern| matches_pattern(pattern, value))
}

fn matches_pattern(pattern: &'static str, value: &str) -> bool {
    if let Ok(cache) = PATTERNS.read() {
        if let Some(compiled) = cache.get(pattern) {
            return compiled.as_ref().is_some_and(|re| re.is_match(value));
        }
    }

    let compiled = match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(pattern, error = %err, "content pattern does not compile");
            None
        },
    };
    let matched = compiled.as_ref().is_some_and(|re| re.is_match(value));
    if let Ok(mut cache) = PATTERNS.write() {
        cache.insert(pattern, compiled);
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_linkage() {
        let info = LinkageInfo::parse("100-01").unwrap();
        assert_eq!(info.tag, "100");
        assert_eq!(info.occurrence, "01");
        assert_eq!(info.script_id, "");
        assert!(!info.is_reverse);
    }

    #[test]
    fn test_parse_reverse_without_script() {
        let info = LinkageInfo::parse("100-01/r").unwrap();
        assert_eq!(info.script_id, "");
        assert!(info.is_reverse);
    }

    #[test]
    fn test_parse_script_codes() {
        assert_eq!(LinkageInfo::parse("245-01/$1").unwrap().script_id, "$1");
        assert_eq!(LinkageInfo::parse("245-01/(N").unwrap().script_id, "(N");
        let arabic = LinkageInfo::parse("100-02/(3/r").unwrap();
        assert_eq!(arabic.script_id, "(3");
        assert!(arabic.is_reverse);
    }

    #[test]
    fn test_unknown_script_is_captured() {
        // Grammar accepts it; the code list check rejects it later.
        assert_eq!(LinkageInfo::parse("245-01/(Q").unwrap().script_id, "(Q");
    }

    #[test]
    fn test_parse_three_digit_occurrence() {
        assert_eq!(LinkageInfo::parse("880-123").unwrap().occurrence, "123");
    }

    #[test]
    fn test_parse_invalid_linkage() {
        for bad in ["", "10-01", "100", "100-1", "abc-01", "100-01/", "100_01"] {
            assert!(LinkageInfo::parse(bad).is_none(), "{bad}");
        }
    }

    #[test]
    fn test_unlinked_occurrence() {
        assert!(LinkageInfo::parse("245-00").unwrap().is_unlinked());
        assert!(!LinkageInfo::parse("245-01").unwrap().is_unlinked());
    }

    #[test]
    fn test_control_number_without_organization() {
        let number = RecordControlNumber::parse("ocm05853149").unwrap();
        assert_eq!(number.organization, None);
        assert_eq!(number.number, "ocm05853149");
        assert!(RecordControlNumber::parse("").is_none());
    }

    #[test]
    fn test_control_number_requires_number() {
        assert!(RecordControlNumber::parse("(OCoLC)").is_none());
        assert!(RecordControlNumber::parse("(OCoLC) ").is_none());
        assert!(RecordControlNumber::parse("(OCoLC)(DLC)").is_none());
        let number = RecordControlNumber::parse("(DE-588)4011882-4").unwrap();
        assert_eq!(number.organization.as_deref(), Some("DE-588"));
        assert_eq!(number.number, "4011882-4");
    }

    #[test]
    fn test_patterns() {
        const LCCN: &[&str] = &[r"^[ a-z]{3}\d{8} ?$"];
        assert!(matches_any(LCCN, "   00000002 "));
        assert!(!matches_any(LCCN, "00000002"));
        // cached path
        assert!(matches_any(LCCN, "agr25000003"));
    }

    #[test]
    fn test_broken_pattern_never_matches() {
        const BROKEN: &[&str] = &[r"^(unclosed"];
        assert!(!matches_any(BROKEN, "(unclosed"));
        assert!(!matches_any(BROKEN, "(unclosed"));
    }
}
