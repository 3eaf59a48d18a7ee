// ============================================================================
// Validator Configuration
// Immutable N(precision, scale) format description
// ============================================================================

use crate::numeric::{FormatError, FormatResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Validator Configuration
// ============================================================================

/// Fixed-point format N(precision, scale).
///
/// - `precision`: maximum count of sign, integer and fraction digits
/// - `scale`: maximum count of fraction digits, always below precision
/// - `only_positive`: reject values carrying an explicit '-'
///
/// The invariant `0 < precision` and `0 <= scale < precision` is checked
/// once, at construction. Fields are private, so a config that exists is
/// always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawValidatorConfig"))]
pub struct ValidatorConfig {
    precision: u32,
    scale: u32,
    only_positive: bool,
}

impl ValidatorConfig {
    /// Create a configuration from raw parameters.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `precision <= 0`
    /// - `InvalidScale` if `scale < 0` or `scale >= precision`
    ///
    /// Precision is checked first.
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> FormatResult<Self> {
        if precision <= 0 {
            tracing::debug!(precision, "rejected validator precision");
            return Err(FormatError::InvalidPrecision { precision });
        }

        if scale < 0 || scale >= precision {
            tracing::debug!(precision, scale, "rejected validator scale");
            return Err(FormatError::InvalidScale { precision, scale });
        }

        Ok(Self {
            precision: precision.unsigned_abs(),
            scale: scale.unsigned_abs(),
            only_positive,
        })
    }

    /// Integer format N(precision): scale 0, signed values allowed.
    pub fn with_precision(precision: i32) -> FormatResult<Self> {
        Self::new(precision, 0, false)
    }

    /// Start a builder with the given precision and default scale/sign policy.
    pub fn builder(precision: i32) -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::new(precision)
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ValidatorConfig`].
///
/// Validation is deferred to [`build`](Self::build).
///
/// # Example
/// ```
/// use number_validator::domain::ValidatorConfig;
///
/// let config = ValidatorConfig::builder(17)
///     .scale(2)
///     .only_positive(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.to_string(), "N(17,2)");
/// assert!(config.only_positive());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValidatorConfigBuilder {
    precision: i32,
    scale: i32,
    only_positive: bool,
}

impl ValidatorConfigBuilder {
    /// Create a new builder for the specified precision
    pub fn new(precision: i32) -> Self {
        Self {
            precision,
            scale: 0,
            only_positive: false,
        }
    }

    /// Set the maximum number of fraction digits
    pub fn scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// Reject values with an explicit negative sign
    pub fn only_positive(mut self, only_positive: bool) -> Self {
        self.only_positive = only_positive;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> FormatResult<ValidatorConfig> {
        ValidatorConfig::new(self.precision, self.scale, self.only_positive)
    }
}

// ============================================================================
// Notation
// ============================================================================

/// Renders `N(m)` for integer formats and `N(m,k)` otherwise.
impl fmt::Display for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({},{})", self.precision, self.scale)
        }
    }
}

impl FromStr for ValidatorConfig {
    type Err = FormatError;

    /// Parse format notation.
    ///
    /// # Examples
    /// - "N(5)" -> precision 5, scale 0
    /// - "N(17,2)" -> precision 17, scale 2
    /// - "n( 10 . 4 )" -> precision 10, scale 4
    ///
    /// The notation carries no sign policy, so `only_positive` is false.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidNotation(s.to_string());

        let body = s
            .trim()
            .strip_prefix(['N', 'n'])
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let (precision_str, scale_str) = match body.split_once([',', '.']) {
            Some((precision, scale)) => (precision, Some(scale)),
            None => (body, None),
        };

        let precision: i32 = precision_str.trim().parse().map_err(|_| invalid())?;
        let scale: i32 = match scale_str {
            Some(scale) => scale.trim().parse().map_err(|_| invalid())?,
            None => 0,
        };

        Self::new(precision, scale, false)
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Unchecked wire form; converted through [`ValidatorConfig::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawValidatorConfig {
    precision: i32,
    #[serde(default)]
    scale: i32,
    #[serde(default)]
    only_positive: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawValidatorConfig> for ValidatorConfig {
    type Error = FormatError;

    fn try_from(raw: RawValidatorConfig) -> Result<Self, Self::Error> {
        Self::new(raw.precision, raw.scale, raw.only_positive)
    }
}
