//! # Utilities - *Internal Helper Utilities*
//!
//! A small collection of utilities that support validation, parsing, and
//! default naming elsewhere within the crate.

use crate::aliases::HashSet;
use crate::enums::error::{DFResult, DFrameError};

/// Maps a possibly negative position onto `0..len`.
///
/// Negative positions count from the end, so `-1` is the last element.
#[inline]
pub fn normalise_index(index: isize, len: usize) -> DFResult<usize> {
    let n = isize::try_from(len).unwrap_or(isize::MAX);
    let i = if index < 0 { index + n } else { index };
    if i < 0 || i >= n {
        return Err(DFrameError::IndexOutOfRange { index, len });
    }
    Ok(i as usize)
}

/// Default column names `C0, C1, ..`.
pub fn generic_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("C{i}")).collect()
}

/// First name that occurs more than once, if any.
pub fn first_duplicate<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    let mut seen = HashSet::default();
    names
        .iter()
        .map(AsRef::as_ref)
        .find(|name| !seen.insert(*name))
}

/// Fails with `DuplicateColumnName` on the first repeated name.
#[inline]
pub fn validate_unique_names<S: AsRef<str>>(names: &[S]) -> DFResult<()> {
    match first_duplicate(names) {
        Some(dup) => Err(DFrameError::DuplicateColumnName(dup.to_owned())),
        None => Ok(()),
    }
}

/// First position (and the later duplicate) in a list of column positions.
pub(crate) fn first_repeated_position(positions: &[usize]) -> Option<usize> {
    let mut seen = HashSet::default();
    positions.iter().copied().find(|p| !seen.insert(*p))
}

/// Parses `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or a bare `YYYY-MM-DD`
/// date (at midnight).
#[cfg(feature = "datetime")]
pub fn parse_datetime_str(s: &str) -> Option<time::PrimitiveDateTime> {
    use time::macros::format_description;
    use time::{Date, PrimitiveDateTime};

    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let iso = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let date_only = format_description!("[year]-[month]-[day]");

    PrimitiveDateTime::parse(s, spaced)
        .or_else(|_| PrimitiveDateTime::parse(s, iso))
        .ok()
        .or_else(|| Date::parse(s, date_only).ok().map(Date::midnight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_index() {
        assert_eq!(normalise_index(0, 3).unwrap(), 0);
        assert_eq!(normalise_index(-1, 3).unwrap(), 2);
        assert_eq!(normalise_index(-3, 3).unwrap(), 0);
        assert!(normalise_index(3, 3).is_err());
        assert!(normalise_index(-4, 3).is_err());
        assert!(normalise_index(0, 0).is_err());
    }

    #[test]
    fn test_generic_names() {
        assert_eq!(generic_names(3), vec!["C0", "C1", "C2"]);
        assert!(generic_names(0).is_empty());
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(first_duplicate(&["a", "b", "a"]), Some("a"));
        assert_eq!(first_duplicate(&["a", "b"]), None);
        assert!(validate_unique_names(&["x", "x"]).is_err());
    }

    #[test]
    fn test_first_repeated_position() {
        assert_eq!(first_repeated_position(&[0, 2, 0]), Some(0));
        assert_eq!(first_repeated_position(&[0, 1]), None);
    }

    #[cfg(feature = "datetime")]
    #[test]
    fn test_parse_datetime_str() {
        let dt = parse_datetime_str("2024-03-01 12:30:00").unwrap();
        assert_eq!(dt.hour(), 12);
        let d = parse_datetime_str("2024-03-01").unwrap();
        assert_eq!(d.hour(), 0);
        assert!(parse_datetime_str("not a date").is_none());
    }
}
