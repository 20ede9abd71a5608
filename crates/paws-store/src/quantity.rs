use paws_core::errors::CoreError;

/// Parse a quantity typed into the cart's number field.
///
/// Accepts whole non-negative numbers only. Blank, negative, fractional and
/// non-numeric text is a validation error rather than a silently stored value.
pub fn parse_quantity(raw: &str) -> Result<u32, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Quantity is required.".into()));
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if let Some(rest) = digits.strip_prefix('-') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::Validation("Quantity cannot be negative.".into()));
        }
    }
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::Validation(format!(
            "Quantity must be a whole number, got '{raw}'."
        )));
    }

    digits
        .parse()
        .map_err(|_| CoreError::Validation(format!("Quantity '{raw}' is too large.")))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", 0)]
    #[case("3", 3)]
    #[case(" 12 ", 12)]
    #[case("+4", 4)]
    #[case("007", 7)]
    fn accepts_whole_numbers(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_quantity(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("", "required")]
    #[case("-1", "negative")]
    #[case("2.5", "whole number")]
    #[case("NaN", "whole number")]
    #[case("abc", "whole number")]
    #[case("-", "whole number")]
    #[case("99999999999", "too large")]
    fn rejects_invalid_text(#[case] raw: &str, #[case] fragment: &str) {
        let err = parse_quantity(raw).unwrap_err();
        assert!(
            err.to_string().contains(fragment),
            "'{raw}' gave '{err}', expected '{fragment}'"
        );
    }
}
