use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("no amount entered")]
    Empty,
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),
    #[error("amount cannot be negative (got {0})")]
    Negative(f64),
}

/// Parse a spending amount typed by the user.
///
/// Accepts an optional leading `$` and surrounding whitespace. Only finite,
/// non-negative numbers are valid.
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let trimmed = input.trim();
    let number = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    if number.is_empty() {
        return Err(AmountError::Empty);
    }

    let value: f64 = number
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(AmountError::NotANumber(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(AmountError::Negative(value));
    }

    // "-0" parses to -0.0
    Ok(if value == 0.0 { 0.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_amount("20"), Ok(20.0));
        assert_eq!(parse_amount("  12.50\n"), Ok(12.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_dollar_prefix() {
        assert_eq!(parse_amount("$15"), Ok(15.0));
        assert_eq!(parse_amount("$ 7.25"), Ok(7.25));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(parse_amount("-5"), Err(AmountError::Negative(-5.0)));
        assert_eq!(parse_amount("$-0.01"), Err(AmountError::Negative(-0.01)));
    }

    #[test]
    fn test_negative_zero_normalised() {
        let value = parse_amount("-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
        assert_eq!(parse_amount("$"), Err(AmountError::Empty));
        assert_eq!(
            parse_amount("ten"),
            Err(AmountError::NotANumber("ten".to_string()))
        );
        assert_eq!(
            parse_amount("12,5"),
            Err(AmountError::NotANumber("12,5".to_string()))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(parse_amount("inf"), Err(AmountError::NotANumber(_))));
        assert!(matches!(parse_amount("NaN"), Err(AmountError::NotANumber(_))));
    }
}
