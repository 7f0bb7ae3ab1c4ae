use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price text contains no digits")]
    Empty,
    #[error("price text has more than one decimal point")]
    AmbiguousSeparator,
    #[error("price is not a positive amount")]
    NonPositive,
}

/// Parses a free-form price string into a validated amount.
///
/// Currency symbols and thousands separators are discarded rather than
/// validated against a locale: only digits and decimal points survive the
/// first pass. Fails when nothing numeric remains, when more than one
/// decimal point does, or when the amount is not positive and finite.
pub fn normalize(raw: &str) -> Result<f64, PriceError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(PriceError::Empty);
    }
    if cleaned.matches('.').count() > 1 {
        return Err(PriceError::AmbiguousSeparator);
    }

    let value: f64 = cleaned.parse().map_err(|_| PriceError::Empty)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(PriceError::NonPositive);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{PriceError, normalize};

    #[test]
    fn strips_currency_and_thousands_separators() {
        assert_eq!(normalize("£1,234.50").unwrap(), 1234.50);
        assert_eq!(normalize("£289.00").unwrap(), 289.00);
        assert_eq!(normalize("  $ 15 ").unwrap(), 15.0);
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(normalize("free"), Err(PriceError::Empty));
        assert_eq!(normalize(""), Err(PriceError::Empty));
        assert_eq!(normalize("£"), Err(PriceError::Empty));
    }

    #[test]
    fn rejects_multiple_decimal_points() {
        assert_eq!(normalize("1.2.3"), Err(PriceError::AmbiguousSeparator));
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert_eq!(normalize("0.00"), Err(PriceError::NonPositive));
        assert_eq!(normalize("£0"), Err(PriceError::NonPositive));
    }
}
