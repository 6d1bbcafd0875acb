use thiserror::Error;

use crate::shapes::ShapeKind;

/// A parameter value that the shape model refuses to compute with.
///
/// This is the only error `validate` produces. Each variant names the
/// parameter(s) involved so the message can be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    /// Parameter is zero, which is also the value of an unset parameter.
    #[error("parameter {name} cannot be 0")]
    Zero { name: &'static str },

    #[error("parameter {name} must be positive, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("parameter {name} must be a finite number")]
    NonFinite { name: &'static str },

    #[error("parameter {name} must be a whole number, got {value}")]
    NotAnInteger { name: &'static str, value: f64 },

    #[error("parameter {name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: u32,
        max: u32,
    },

    /// Strict triangle inequality violated (degenerate or impossible triangle).
    #[error("sides a={a}, b={b}, c={c} do not form a triangle")]
    TriangleInequality { a: f64, b: f64, c: f64 },

    #[error("height h={h} must be less than side a={a}")]
    RhombusHeight { a: f64, h: f64 },
}

impl InvalidParameter {
    /// The single parameter this error is about, if there is one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::Zero { name }
            | Self::Negative { name, .. }
            | Self::NonFinite { name }
            | Self::NotAnInteger { name, .. }
            | Self::OutOfRange { name, .. } => Some(*name),
            Self::TriangleInequality { .. } => None,
            Self::RhombusHeight { .. } => Some("h"),
        }
    }
}

/// Errors from constructing or populating a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("unknown shape: {0:?}")]
    UnknownShape(String),

    #[error("{kind} has no parameter named {name:?}")]
    UnknownParameter { kind: ShapeKind, name: String },

    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
}
