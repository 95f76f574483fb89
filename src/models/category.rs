//! Category sets
//!
//! A category set is the ordered list of real category names of a bucket. The
//! computed `TOTAL` and `SURPLUS` columns are appended on output and are never
//! stored as real categories.

use std::fmt;

/// Label of the computed total column
pub const TOTAL_LABEL: &str = "TOTAL";

/// Label of the computed surplus column
pub const SURPLUS_LABEL: &str = "SURPLUS";

/// Delimiter used when a category set is rendered as a single string
pub const CATEGORY_DELIMITER: char = ',';

/// Why a category name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    ContainsWhitespace(String),
    ContainsComma(String),
    Reserved(String),
    Duplicate(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::ContainsWhitespace(name) => {
                write!(f, "Category name cannot contain whitespace: '{}'", name)
            }
            Self::ContainsComma(name) => {
                write!(f, "Category name cannot contain commas: '{}'", name)
            }
            Self::Reserved(name) => write!(f, "'{}' is a reserved column name", name),
            Self::Duplicate(name) => write!(f, "Category '{}' was already added", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Check a single category name
pub fn validate_category_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(CategoryValidationError::ContainsWhitespace(name.to_string()));
    }
    if name.contains(CATEGORY_DELIMITER) {
        return Err(CategoryValidationError::ContainsComma(name.to_string()));
    }
    if is_reserved_label(name) {
        return Err(CategoryValidationError::Reserved(name.to_string()));
    }
    Ok(())
}

/// True for the computed column labels, ignoring case
pub fn is_reserved_label(name: &str) -> bool {
    name.eq_ignore_ascii_case(TOTAL_LABEL) || name.eq_ignore_ascii_case(SURPLUS_LABEL)
}

/// Upper-case the first letter and lower-case the rest ("vEHICLE" -> "Vehicle")
pub fn capitalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Ordered, unique, validated category names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Build a set from names, rejecting invalid or repeated entries
    pub fn new<I, S>(names: I) -> Result<Self, CategoryValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            set.push(name)?;
        }
        Ok(set)
    }

    /// Build a set from labels read back from a sheet header
    ///
    /// Blank cells, computed column labels, repeats and anything that would not
    /// pass validation are skipped.
    pub fn from_header_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for label in labels {
            let label = label.as_ref().trim();
            // ignoring the error is the filter
            let _ = set.push(label);
        }
        set
    }

    /// Append a category name
    pub fn push(&mut self, name: impl Into<String>) -> Result<(), CategoryValidationError> {
        let name = name.into();
        validate_category_name(&name)?;
        if self.contains(&name) {
            return Err(CategoryValidationError::Duplicate(name));
        }
        self.names.push(name);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Real category names, in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Real names followed by `TOTAL` and `SURPLUS`
    pub fn labels(&self) -> Vec<String> {
        let mut labels = self.names.clone();
        labels.push(TOTAL_LABEL.to_string());
        labels.push(SURPLUS_LABEL.to_string());
        labels
    }

    /// Labels that go into the sheet header row (everything except `SURPLUS`)
    pub fn header_labels(&self) -> Vec<String> {
        let mut labels = self.names.clone();
        labels.push(TOTAL_LABEL.to_string());
        labels
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiter = CATEGORY_DELIMITER.to_string();
        write!(f, "{}", self.labels().join(&delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_end_with_total_and_surplus() {
        let set = CategorySet::new(["Housing", "Food"]).unwrap();
        assert_eq!(set.labels(), vec!["Housing", "Food", "TOTAL", "SURPLUS"]);
        assert_eq!(set.to_string(), "Housing,Food,TOTAL,SURPLUS");
        assert_eq!(set.header_labels(), vec!["Housing", "Food", "TOTAL"]);
    }

    #[test]
    fn test_empty_set_still_has_computed_labels() {
        let set = CategorySet::default();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "TOTAL,SURPLUS");
    }

    #[test]
    fn test_rejects_invalid_names() {
        assert_eq!(
            validate_category_name(""),
            Err(CategoryValidationError::EmptyName)
        );
        assert!(matches!(
            validate_category_name("Car Loan"),
            Err(CategoryValidationError::ContainsWhitespace(_))
        ));
        assert!(matches!(
            validate_category_name("Car\tLoan"),
            Err(CategoryValidationError::ContainsWhitespace(_))
        ));
        assert!(matches!(
            validate_category_name("Car,Loan"),
            Err(CategoryValidationError::ContainsComma(_))
        ));
        assert!(matches!(
            validate_category_name("total"),
            Err(CategoryValidationError::Reserved(_))
        ));
        assert!(validate_category_name("Vehicle").is_ok());
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = CategorySet::new(["Food", "Food"]);
        assert_eq!(
            result,
            Err(CategoryValidationError::Duplicate("Food".to_string()))
        );
    }

    #[test]
    fn test_from_header_labels_filters() {
        let set = CategorySet::from_header_labels(["Housing", "", "Food", "TOTAL", "Food", "SURPLUS"]);
        assert_eq!(set.names(), &["Housing".to_string(), "Food".to_string()]);
    }

    #[test]
    fn test_capitalize_name() {
        assert_eq!(capitalize_name("vEHICLE"), "Vehicle");
        assert_eq!(capitalize_name("rent"), "Rent");
        assert_eq!(capitalize_name(""), "");
    }
}
