//! Parameter text validation.
//!
//! Turns the text a user typed for one parameter into a number, applying the
//! same rules the input fields enforce: plain decimal notation, a bounded
//! number of decimal places, and an inclusive range. The shape model never
//! sees raw text.

use geocalc_kernel::{ParamKind, ParamSpec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted range and precision for one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRule {
    pub min: f64,
    pub max: f64,
    pub decimals: u32,
}

impl Default for InputRule {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 200.0,
            decimals: 2,
        }
    }
}

impl InputRule {
    pub fn integer(min: u32, max: u32) -> Self {
        Self {
            min: f64::from(min),
            max: f64::from(max),
            decimals: 0,
        }
    }

    /// The rule for a declared parameter: integer parameters use their own
    /// bounds, real parameters use `self`.
    pub fn for_spec(&self, spec: &ParamSpec) -> Self {
        match spec.kind {
            ParamKind::Integer { min, max } => Self::integer(min, max),
            ParamKind::Real => *self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{text:?} has more than {decimals} decimal places")]
    TooManyDecimals { text: String, decimals: u32 },

    #[error("{value} is outside the allowed range {min}..={max}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("expected name=value, got {0:?}")]
    MalformedAssignment(String),

    #[error("parameter {0} is given more than once")]
    DuplicateParameter(String),
}

/// Parse one field. Empty text means "unset" and yields `None`.
pub fn parse_param(text: &str, rule: &InputRule) -> Result<Option<f64>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(InputError::NotANumber(text.to_owned()));
    }
    if fraction.len() > rule.decimals as usize {
        return Err(InputError::TooManyDecimals {
            text: text.to_owned(),
            decimals: rule.decimals,
        });
    }

    let value: f64 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_owned()))?;
    if value < rule.min || value > rule.max {
        return Err(InputError::OutOfRange {
            value,
            min: rule.min,
            max: rule.max,
        });
    }
    Ok(Some(value))
}

/// Split a `name=value` command-line argument.
pub fn parse_assignment(arg: &str) -> Result<(&str, &str), InputError> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(InputError::MalformedAssignment(arg.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimals() {
        let rule = InputRule::default();
        assert_eq!(parse_param("3", &rule), Ok(Some(3.0)));
        assert_eq!(parse_param(" 4.25 ", &rule), Ok(Some(4.25)));
        assert_eq!(parse_param(".5", &rule), Ok(Some(0.5)));
        assert_eq!(parse_param("7.", &rule), Ok(Some(7.0)));
        assert_eq!(parse_param("0", &rule), Ok(Some(0.0)));
    }

    #[test]
    fn test_empty_is_unset() {
        assert_eq!(parse_param("", &InputRule::default()), Ok(None));
        assert_eq!(parse_param("   ", &InputRule::default()), Ok(None));
    }

    #[test]
    fn test_rejects_non_decimal_notation() {
        let rule = InputRule::default();
        for text in ["abc", "1e2", "inf", "NaN", "1.2.3", ".", "-", "1,5"] {
            assert!(
                matches!(parse_param(text, &rule), Err(InputError::NotANumber(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn test_precision_and_range() {
        let rule = InputRule::default();
        assert!(matches!(
            parse_param("1.234", &rule),
            Err(InputError::TooManyDecimals { decimals: 2, .. })
        ));
        assert!(matches!(parse_param("200.01", &rule), Err(InputError::OutOfRange { .. })));
        assert!(matches!(parse_param("-1", &rule), Err(InputError::OutOfRange { .. })));
        assert_eq!(parse_param("200", &rule), Ok(Some(200.0)));
    }

    #[test]
    fn test_integer_rule_from_spec() {
        let spec = ParamSpec::integer("n", "base sides n", 3, 10);
        let rule = InputRule::default().for_spec(&spec);
        assert_eq!(rule, InputRule::integer(3, 10));
        assert_eq!(parse_param("6", &rule), Ok(Some(6.0)));
        assert!(matches!(parse_param("6.0", &rule), Err(InputError::TooManyDecimals { .. })));
        assert!(matches!(parse_param("11", &rule), Err(InputError::OutOfRange { .. })));
    }

    #[test]
    fn test_assignment() {
        assert_eq!(parse_assignment("a=3"), Ok(("a", "3")));
        assert_eq!(parse_assignment("h="), Ok(("h", "")));
        assert!(parse_assignment("=3").is_err());
        assert!(parse_assignment("a3").is_err());
    }
}
