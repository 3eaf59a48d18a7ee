// ============================================================================
// Number Validator
// Checks strings against an N(precision, scale) format
// ============================================================================

use crate::domain::ValidatorConfig;
use crate::interfaces::ValueValidator;
use crate::numeric::{FormatResult, ParsedNumber, Sign};
use std::fmt;

/// Why a value was turned down. Only ever logged: callers get `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Empty,
    Malformed,
    PrecisionExceeded { significant_len: usize, precision: u32 },
    ScaleExceeded { fractional_len: usize, scale: u32 },
    NegativeNotAllowed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "absent or empty"),
            Rejection::Malformed => write!(f, "not a fixed-point number"),
            Rejection::PrecisionExceeded {
                significant_len,
                precision,
            } => write!(
                f,
                "{} significant characters, precision {}",
                significant_len, precision
            ),
            Rejection::ScaleExceeded {
                fractional_len,
                scale,
            } => write!(f, "{} fraction digits, scale {}", fractional_len, scale),
            Rejection::NegativeNotAllowed => write!(f, "negative value not allowed"),
        }
    }
}

/// Check `value` against `config`, keeping the parse on success.
fn check<'a>(
    config: &ValidatorConfig,
    value: Option<&'a str>,
) -> Result<ParsedNumber<'a>, Rejection> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(Rejection::Empty),
    };

    let parsed = ParsedNumber::parse(value).ok_or(Rejection::Malformed)?;

    // Sign counts toward precision
    let significant_len = parsed.significant_len();
    if significant_len > config.precision() as usize {
        return Err(Rejection::PrecisionExceeded {
            significant_len,
            precision: config.precision(),
        });
    }

    let fractional_len = parsed.fractional_len();
    if fractional_len > config.scale() as usize {
        return Err(Rejection::ScaleExceeded {
            fractional_len,
            scale: config.scale(),
        });
    }

    if config.only_positive() && parsed.sign() == Sign::Minus {
        return Err(Rejection::NegativeNotAllowed);
    }

    Ok(parsed)
}

/// Check whether `value` matches the format described by `config`.
///
/// Total over its inputs: absent, empty, malformed, too long, too many
/// fraction digits, or negative under `only_positive` all give `false`.
///
/// # Example
/// ```
/// use number_validator::domain::ValidatorConfig;
/// use number_validator::validator::is_valid;
///
/// let config = ValidatorConfig::new(4, 2, true).unwrap();
/// assert!(is_valid(&config, Some("+1.23")));
/// assert!(!is_valid(&config, Some("-1.23")));
/// assert!(!is_valid(&config, None));
/// ```
pub fn is_valid(config: &ValidatorConfig, value: Option<&str>) -> bool {
    match check(config, value) {
        Ok(_) => true,
        Err(rejection) => {
            tracing::trace!(format = %config, ?value, %rejection, "value rejected");
            false
        }
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validator bound to one [`ValidatorConfig`].
///
/// Holds no mutable state, so a single instance can be shared across
/// threads and called concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberValidator {
    config: ValidatorConfig,
    notation: String,
}

impl NumberValidator {
    /// Create a validator from raw parameters.
    ///
    /// # Errors
    /// Same as [`ValidatorConfig::new`].
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> FormatResult<Self> {
        ValidatorConfig::new(precision, scale, only_positive).map(Self::from_config)
    }

    /// Create a validator from an already checked configuration.
    pub fn from_config(config: ValidatorConfig) -> Self {
        Self {
            notation: config.to_string(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Check whether `value` matches this validator's format.
    #[inline]
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        is_valid(&self.config, value)
    }

    /// Parse `value` if, and only if, it is valid.
    ///
    /// `parse(v).is_some()` always agrees with `is_valid(v)`.
    pub fn parse<'a>(&self, value: Option<&'a str>) -> Option<ParsedNumber<'a>> {
        check(&self.config, value).ok()
    }
}

impl ValueValidator for NumberValidator {
    fn is_valid(&self, value: Option<&str>) -> bool {
        NumberValidator::is_valid(self, value)
    }

    fn name(&self) -> &str {
        &self.notation
    }
}

impl From<ValidatorConfig> for NumberValidator {
    fn from(config: ValidatorConfig) -> Self {
        Self::from_config(config)
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::numeric::FormatError;
    use proptest::prelude::*;
    use quickcheck::{quickcheck, TestResult};

    fn valid_config() -> impl Strategy<Value = ValidatorConfig> {
        (1i32..40)
            .prop_flat_map(|precision| (Just(precision), 0..precision, any::<bool>()))
            .prop_map(|(p, s, only_positive)| ValidatorConfig::new(p, s, only_positive).unwrap())
    }

    proptest! {
        #[test]
        fn non_positive_precision_always_fails(
            precision in i32::MIN..=0,
            scale in any::<i32>(),
            only_positive in any::<bool>(),
        ) {
            let err = ValidatorConfig::new(precision, scale, only_positive).unwrap_err();
            prop_assert_eq!(err, FormatError::InvalidPrecision { precision });
        }

        #[test]
        fn out_of_range_scale_always_fails(
            precision in 1i32..1000,
            offset in 0i32..1000,
            negative in any::<bool>(),
        ) {
            let scale = if negative { -offset - 1 } else { precision + offset };
            let err = ValidatorConfig::new(precision, scale, true).unwrap_err();
            prop_assert_eq!(err, FormatError::InvalidScale { precision, scale });
        }

        #[test]
        fn absent_and_empty_are_rejected(config in valid_config()) {
            prop_assert!(!is_valid(&config, None));
            prop_assert!(!is_valid(&config, Some("")));
        }

        #[test]
        fn validation_is_idempotent(config in valid_config(), value in ".*") {
            let first = is_valid(&config, Some(value.as_str()));
            for _ in 0..3 {
                prop_assert_eq!(is_valid(&config, Some(value.as_str())), first);
            }
        }

        #[test]
        fn well_formed_values_follow_digit_budget(
            config in valid_config(),
            value in "[+-]?[0-9]{1,20}([.,][0-9]{1,8})?",
        ) {
            let sign_len = usize::from(value.starts_with(['+', '-']));
            let (int_part, frac_part) = match value[sign_len..].split_once(['.', ',']) {
                Some((int_part, frac_part)) => (int_part, frac_part),
                None => (&value[sign_len..], ""),
            };

            let expected = sign_len + int_part.len() + frac_part.len() <= config.precision() as usize
                && frac_part.len() <= config.scale() as usize
                && !(config.only_positive() && value.starts_with('-'));

            prop_assert_eq!(is_valid(&config, Some(value.as_str())), expected);
        }
    }

    #[test]
    fn separators_are_interchangeable() {
        fn prop(
            int_part: u64,
            frac_part: u32,
            precision: u8,
            scale: u8,
            only_positive: bool,
        ) -> TestResult {
            let precision = i32::from(precision) + 1;
            let scale = i32::from(scale) % precision;
            let config = match ValidatorConfig::new(precision, scale, only_positive) {
                Ok(config) => config,
                Err(_) => return TestResult::discard(),
            };

            let dot = format!("{}.{}", int_part, frac_part);
            let comma = format!("{},{}", int_part, frac_part);
            TestResult::from_bool(
                is_valid(&config, Some(dot.as_str())) == is_valid(&config, Some(comma.as_str())),
            )
        }

        quickcheck(prop as fn(u64, u32, u8, u8, bool) -> TestResult);
    }
}
