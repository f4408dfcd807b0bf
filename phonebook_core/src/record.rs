//! The phone book record model.

use std::fmt;

/// Number of fields in a record, and therefore in one line of the data file.
pub const FIELD_COUNT: usize = 6;

/// One phone book entry.
///
/// All fields are plain text. Phone numbers are untyped strings, empty
/// values are accepted everywhere, and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub last_name: String,
    pub first_name: String,
    /// Middle name.
    pub surname: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl Record {
    #[must_use]
    pub const fn new(
        last_name: String,
        first_name: String,
        surname: String,
        organization: String,
        work_phone: String,
        personal_phone: String,
    ) -> Self {
        Self {
            last_name,
            first_name,
            surname,
            organization,
            work_phone,
            personal_phone,
        }
    }

    /// All six fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.last_name,
            &self.first_name,
            &self.surname,
            &self.organization,
            &self.work_phone,
            &self.personal_phone,
        ]
    }

    /// Case-insensitive substring test against the rendered record.
    ///
    /// The haystack is the full comma-joined rendering, so a term spanning
    /// a field separator ("smith,john") still matches.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

/// Renders the six fields joined by commas. This is both the display form
/// and the on-disk line format.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            "Smith".to_string(),
            "John".to_string(),
            "A".to_string(),
            "Acme".to_string(),
            "555-1111".to_string(),
            "555-2222".to_string(),
        )
    }

    #[test]
    fn test_display_joins_fields_with_commas() {
        assert_eq!(sample().to_string(), "Smith,John,A,Acme,555-1111,555-2222");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let record = sample();
        assert!(record.matches("acme"));
        assert!(record.matches("ACME"));
        assert!(!record.matches("beta"));
    }

    #[test]
    fn test_matches_across_field_boundary() {
        // The separator itself is part of the haystack.
        assert!(sample().matches("smith,john"));
    }

    #[test]
    fn test_empty_fields_render() {
        let record = Record::new(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        assert_eq!(record.to_string(), ",,,,,");
    }
}
