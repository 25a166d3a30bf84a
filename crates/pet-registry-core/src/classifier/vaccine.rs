//! Vaccine expiry parsing.

use chrono::{DateTime, NaiveDate};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];

/// Interpretation of a record's `vaccine_expire` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaccineExpiry {
    /// Empty, `-` or `N/A`: nothing on file
    Absent,
    /// A recognisable calendar date
    Date(NaiveDate),
    /// Present but not a date we understand
    Unparseable,
}

impl VaccineExpiry {
    /// Parse an expiry field.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, US `MM/DD/YYYY`, `Jul 1, 2025`
    /// (short or long month name), `YYYY-MM` (first of the month) and
    /// RFC 3339 timestamps.
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() || value == "-" || value.eq_ignore_ascii_case("N/A") {
            return VaccineExpiry::Absent;
        }

        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        {
            return VaccineExpiry::Date(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
            return VaccineExpiry::Date(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return VaccineExpiry::Date(timestamp.date_naive());
        }

        VaccineExpiry::Unparseable
    }

    /// Whether the vaccination lapsed strictly before `as_of`.
    ///
    /// An unparseable value is read as `as_of` itself and so never counts
    /// as lapsed.
    pub fn is_lapsed(&self, as_of: NaiveDate) -> bool {
        match self {
            VaccineExpiry::Date(date) => *date < as_of,
            VaccineExpiry::Absent | VaccineExpiry::Unparseable => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sentinels_are_absent() {
        for raw in ["", "  ", "-", "N/A", "n/a"] {
            assert_eq!(VaccineExpiry::parse(raw), VaccineExpiry::Absent, "{raw:?}");
        }
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(
            VaccineExpiry::parse("2025-07-01"),
            VaccineExpiry::Date(date("2025-07-01"))
        );
        assert_eq!(
            VaccineExpiry::parse("2025-07-01T08:30:00+07:00"),
            VaccineExpiry::Date(date("2025-07-01"))
        );
        assert_eq!(
            VaccineExpiry::parse("2025/07/01"),
            VaccineExpiry::Date(date("2025-07-01"))
        );
        assert_eq!(
            VaccineExpiry::parse("07/01/2025"),
            VaccineExpiry::Date(date("2025-07-01"))
        );
        assert_eq!(
            VaccineExpiry::parse("Jul 1, 2025"),
            VaccineExpiry::Date(date("2025-07-01"))
        );
        assert_eq!(
            VaccineExpiry::parse("July 1, 2025"),
            VaccineExpiry::Date(date("2025-07-01"))
        );
        assert_eq!(
            VaccineExpiry::parse("2025-07"),
            VaccineExpiry::Date(date("2025-07-01"))
        );
        assert_eq!(VaccineExpiry::parse("not-a-date"), VaccineExpiry::Unparseable);
        assert_eq!(VaccineExpiry::parse("2025-13"), VaccineExpiry::Unparseable);
        assert_eq!(VaccineExpiry::parse("31/02/2025"), VaccineExpiry::Unparseable);
        assert_eq!(VaccineExpiry::parse("2025-13-40"), VaccineExpiry::Unparseable);
    }

    #[test]
    fn test_lapsed_is_strict() {
        let as_of = date("2025-12-12");
        assert!(VaccineExpiry::parse("2025-12-11").is_lapsed(as_of));
        assert!(!VaccineExpiry::parse("2025-12-12").is_lapsed(as_of));
        assert!(!VaccineExpiry::parse("2026-06-01").is_lapsed(as_of));
        assert!(!VaccineExpiry::Unparseable.is_lapsed(as_of));
        assert!(!VaccineExpiry::Absent.is_lapsed(as_of));
    }
}
