// ============================================================================
// Parsed Number
// Sign / integer / fraction split of a fixed-point decimal string
// ============================================================================

use super::errors::{FormatError, FormatResult};
use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::LazyLock;

/// Optional sign, integer digits, optional separator followed by fraction
/// digits. Anchored at both ends.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^([+-]?)([0-9]+)([.,]([0-9]+))?$")
        .case_insensitive(true)
        .build()
        .expect("number pattern is a valid regex")
});

// ============================================================================
// Sign
// ============================================================================

/// Explicit sign character of a parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// No sign character
    Unsigned,
    /// Leading '+'
    Plus,
    /// Leading '-'
    Minus,
}

impl Sign {
    fn from_marker(marker: &str) -> Self {
        match marker {
            "+" => Sign::Plus,
            "-" => Sign::Minus,
            _ => Sign::Unsigned,
        }
    }

    /// Number of characters the sign occupies in the source string.
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Sign::Unsigned => 0,
            Sign::Plus | Sign::Minus => 1,
        }
    }

    /// True when no sign character was present.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Sign::Unsigned)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Sign::Unsigned => "",
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }
}

// ============================================================================
// Parsed Number
// ============================================================================

/// A string split into its sign, integer digits and optional fraction.
///
/// Digit groups borrow from the parsed input. A `ParsedNumber` only says the
/// text has the right shape; whether it fits a given precision and scale is
/// decided by the validator.
///
/// # Example
/// ```
/// use number_validator::numeric::{ParsedNumber, Sign};
///
/// let n = ParsedNumber::parse("-12,50").unwrap();
/// assert_eq!(n.sign(), Sign::Minus);
/// assert_eq!(n.integer_digits(), "12");
/// assert_eq!(n.fractional_digits(), Some("50"));
/// assert_eq!(n.significant_len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedNumber<'a> {
    sign: Sign,
    integer: &'a str,
    separator: Option<char>,
    fraction: Option<&'a str>,
}

impl<'a> ParsedNumber<'a> {
    /// Split `value` into its parts.
    ///
    /// Returns `None` when the whole string does not have the shape
    /// `[+-]digits[(.|,)digits]`. A separator must be followed by at least
    /// one digit.
    pub fn parse(value: &'a str) -> Option<Self> {
        let captures = NUMBER_PATTERN.captures(value)?;

        let sign = captures
            .get(1)
            .map_or(Sign::Unsigned, |m| Sign::from_marker(m.as_str()));
        let integer = captures.get(2)?.as_str();

        let (separator, fraction) = match (captures.get(3), captures.get(4)) {
            (Some(group), Some(digits)) => (group.as_str().chars().next(), Some(digits.as_str())),
            _ => (None, None),
        };

        Some(Self {
            sign,
            integer,
            separator,
            fraction,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        matches!(self.sign, Sign::Minus)
    }

    /// Digits before the separator (leading zeros preserved).
    #[inline]
    pub const fn integer_digits(&self) -> &'a str {
        self.integer
    }

    /// Digits after the separator, if a fraction was present.
    #[inline]
    pub const fn fractional_digits(&self) -> Option<&'a str> {
        self.fraction
    }

    /// The separator character that was used ('.' or ',').
    #[inline]
    pub const fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Number of fraction digits, 0 for integers.
    #[inline]
    pub fn fractional_len(&self) -> usize {
        self.fraction.map_or(0, str::len)
    }

    /// Characters counted against precision: sign, integer digits and
    /// fraction digits. The separator is not counted.
    #[inline]
    pub fn significant_len(&self) -> usize {
        self.sign.len() + self.integer.len() + self.fractional_len()
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`, reading ',' as '.'.
    ///
    /// The scale of the result equals the number of fraction digits, so
    /// `"1,50"` becomes `1.50`.
    ///
    /// # Errors
    /// Returns `Unrepresentable` if the value exceeds `Decimal`'s range or
    /// its 28 fractional digits.
    pub fn to_decimal(&self) -> FormatResult<Decimal> {
        let mut normalized =
            String::with_capacity(1 + self.integer.len() + 1 + self.fractional_len());
        if self.is_negative() {
            normalized.push('-');
        }
        normalized.push_str(self.integer);
        if let Some(fraction) = self.fraction {
            normalized.push('.');
            normalized.push_str(fraction);
        }

        Decimal::from_str_exact(&normalized)
            .map_err(|_| FormatError::Unrepresentable(self.to_string()))
    }
}

impl fmt::Display for ParsedNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.as_str(), self.integer)?;
        if let (Some(separator), Some(fraction)) = (self.separator, self.fraction) {
            write!(f, "{}{}", separator, fraction)?;
        }
        Ok(())
    }
}
