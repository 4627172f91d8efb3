/// Validation utilities for user input

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Parse a numeric text field. Blank, non-numeric and non-finite input yield `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a field that only counts when it holds a positive number
pub fn parse_positive(input: &str) -> Option<f64> {
    parse_number(input).filter(|value| *value > 0.0)
}

/// Validate a required, positive numeric field
///
/// `field` is the label used in messages, e.g. "Price" gives "Price is required".
pub fn validate_positive(input: &str, field: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }

    match parse_number(input) {
        None => ValidationResult::err(format!("{} must be a number", field)),
        Some(value) if value <= 0.0 => ValidationResult::err(format!("{} must be positive", field)),
        Some(_) => ValidationResult::ok(),
    }
}

/// Validate a free-text field that must not be blank
pub fn validate_required(input: &str, field: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("100"), Some(100.0));
        assert_eq!(parse_number(" 0.25 "), Some(0.25));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
    }

    #[test]
    fn test_positive_validation() {
        assert!(validate_positive("100", "Price").is_valid);
        assert_eq!(
            validate_positive("", "Price").error.as_deref(),
            Some("Price is required")
        );
        assert_eq!(
            validate_positive("   ", "Quantity").error.as_deref(),
            Some("Quantity is required")
        );
        assert_eq!(
            validate_positive("0", "Quantity").error.as_deref(),
            Some("Quantity must be positive")
        );
        assert_eq!(
            validate_positive("-5", "Trigger price").error.as_deref(),
            Some("Trigger price must be positive")
        );
        assert_eq!(
            validate_positive("12a", "Price").error.as_deref(),
            Some("Price must be a number")
        );
    }

    #[test]
    fn test_required_validation() {
        assert!(validate_required("0xabc", "Address").is_valid);
        assert!(!validate_required("  ", "Address").is_valid);
    }
}
