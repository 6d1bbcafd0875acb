//! Capability traits shared by the concrete shapes.
//!
//! `ShapeGeometry` is the base every shape implements. Planar shapes add a
//! perimeter and an outline through `PlanarShape`; solids add a volume
//! through `SolidShape`. [`crate::Shape`] dispatches over the concrete
//! structs with an exhaustive match, so these traits stay object-safe.

use crate::config::FormulaSet;
use crate::error::InvalidParameter;
use crate::metrics::{MetricName, Metrics};
use crate::outline::Outline;
use crate::shapes::ShapeKind;

/// Base capability set.
pub trait ShapeGeometry {
    fn kind(&self) -> ShapeKind;

    /// Current parameter values, in declaration order.
    fn values(&self) -> Vec<f64>;

    /// Plane area for planar shapes, total surface area for solids.
    fn area(&self) -> f64;

    /// Geometric constraints beyond "every parameter is positive".
    fn check_constraints(&self) -> Result<(), InvalidParameter> {
        Ok(())
    }

    /// Append shape-specific metrics (diagonal, median, diameter).
    fn extra_metrics(&self, _metrics: &mut Metrics) {}

    /// Check every declared parameter, then the shape's own constraints.
    fn validate(&self) -> Result<(), InvalidParameter> {
        for (spec, value) in self.kind().params().iter().zip(self.values()) {
            spec.check(value)?;
        }
        self.check_constraints()
    }
}

pub trait PlanarShape: ShapeGeometry {
    fn perimeter(&self) -> f64;

    /// Vertices derived from the same parameters as the metrics.
    ///
    /// Only meaningful for validated parameters.
    fn outline(&self) -> Outline;

    /// Area, perimeter, then extras. Does not validate.
    fn metrics(&self) -> Metrics {
        let mut metrics = Metrics::new();
        metrics.insert(MetricName::Area, self.area());
        metrics.insert(MetricName::Perimeter, self.perimeter());
        self.extra_metrics(&mut metrics);
        metrics
    }
}

pub trait SolidShape: ShapeGeometry {
    fn volume(&self) -> f64;

    /// Surface area under [`FormulaSet::Legacy`].
    fn legacy_area(&self) -> f64 {
        self.area()
    }

    /// Volume under [`FormulaSet::Legacy`].
    fn legacy_volume(&self) -> f64 {
        self.volume()
    }

    /// Area, volume, then extras. Does not validate.
    fn metrics(&self, formulas: FormulaSet) -> Metrics {
        let (area, volume) = match formulas {
            FormulaSet::Standard => (self.area(), self.volume()),
            FormulaSet::Legacy => (self.legacy_area(), self.legacy_volume()),
        };
        let mut metrics = Metrics::new();
        metrics.insert(MetricName::Area, area);
        metrics.insert(MetricName::Volume, volume);
        self.extra_metrics(&mut metrics);
        metrics
    }
}
