//! Static parameter declarations.

use serde::Serialize;

use crate::error::InvalidParameter;

/// Numeric type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamKind {
    Real,
    /// Whole number within `[min, max]`.
    Integer { min: u32, max: u32 },
}

/// Declaration of a single shape parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn real(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Real,
        }
    }

    pub const fn integer(name: &'static str, label: &'static str, min: u32, max: u32) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Integer { min, max },
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, ParamKind::Integer { .. })
    }

    /// Check a value against this declaration: finite, not negative, not
    /// zero, and for integers whole and within bounds.
    pub fn check(&self, value: f64) -> Result<(), InvalidParameter> {
        let name = self.name;
        if !value.is_finite() {
            return Err(InvalidParameter::NonFinite { name });
        }
        if value < 0.0 {
            return Err(InvalidParameter::Negative { name, value });
        }
        if value == 0.0 {
            return Err(InvalidParameter::Zero { name });
        }
        if let ParamKind::Integer { min, max } = self.kind {
            if value.fract() != 0.0 {
                return Err(InvalidParameter::NotAnInteger { name, value });
            }
            if value < f64::from(min) || value > f64::from(max) {
                return Err(InvalidParameter::OutOfRange { name, value, min, max });
            }
        }
        Ok(())
    }

    /// Convert an assigned value to the stored integer representation.
    ///
    /// Bounds are not enforced here (zero stays representable as "unset");
    /// they are enforced by [`ParamSpec::check`] at validation time.
    pub(crate) fn to_whole(&self, value: f64) -> Result<u32, InvalidParameter> {
        let name = self.name;
        if !value.is_finite() {
            return Err(InvalidParameter::NonFinite { name });
        }
        if value < 0.0 {
            return Err(InvalidParameter::Negative { name, value });
        }
        if value.fract() != 0.0 {
            return Err(InvalidParameter::NotAnInteger { name, value });
        }
        if value > f64::from(u32::MAX) {
            let (min, max) = match self.kind {
                ParamKind::Integer { min, max } => (min, max),
                ParamKind::Real => (0, u32::MAX),
            };
            return Err(InvalidParameter::OutOfRange { name, value, min, max });
        }
        Ok(value as u32)
    }
}
