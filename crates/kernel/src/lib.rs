//! Shape model for the geometry calculator.
//!
//! A [`Shape`] is selected by [`ShapeKind`], populated from a plain
//! `(name, value)` record and asked for its [`Metrics`]. Validation always
//! runs first; a failed check yields a single [`InvalidParameter`] and no
//! partial result.

pub mod config;
pub mod error;
pub mod metrics;
pub mod outline;
pub mod params;
pub mod shapes;
pub mod traits;

pub use config::{FormulaSet, ModelConfig};
pub use error::{InvalidParameter, ShapeError};
pub use metrics::{MetricName, Metrics};
pub use outline::Outline;
pub use params::{ParamKind, ParamSpec};
pub use shapes::{Dimensionality, Shape, ShapeKind};
pub use traits::{PlanarShape, ShapeGeometry, SolidShape};
