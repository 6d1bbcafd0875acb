pub mod planar;
pub mod solid;

pub use planar::*;
pub use solid::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::ModelConfig;
use crate::error::{InvalidParameter, ShapeError};
use crate::metrics::Metrics;
use crate::outline::Outline;
use crate::params::ParamSpec;
use crate::traits::{PlanarShape, ShapeGeometry, SolidShape};

/// Whether a shape lives in the plane or in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimensionality {
    Planar,
    Solid,
}

/// Tag identifying a concrete shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Square,
    Circle,
    Rhombus,
    Triangle,
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Parallelepiped,
    Pyramid,
}

const SIDE_A: ParamSpec = ParamSpec::real("a", "side a");
const SIDE_B: ParamSpec = ParamSpec::real("b", "side b");
const SIDE_C: ParamSpec = ParamSpec::real("c", "side c");
const EDGE_A: ParamSpec = ParamSpec::real("a", "edge a");
const EDGE_B: ParamSpec = ParamSpec::real("b", "edge b");
const EDGE_C: ParamSpec = ParamSpec::real("c", "edge c");
const RADIUS: ParamSpec = ParamSpec::real("r", "radius r");
const HEIGHT: ParamSpec = ParamSpec::real("h", "height h");
const BASE_EDGE: ParamSpec = ParamSpec::real("a", "base edge a");
const BASE_SIDES: ParamSpec = ParamSpec::integer("n", "base sides n", 3, 10);

impl ShapeKind {
    pub const ALL: [ShapeKind; 11] = [
        Self::Rectangle,
        Self::Square,
        Self::Circle,
        Self::Rhombus,
        Self::Triangle,
        Self::Cube,
        Self::Sphere,
        Self::Cylinder,
        Self::Cone,
        Self::Parallelepiped,
        Self::Pyramid,
    ];

    /// Canonical lower-case name, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Rhombus => "rhombus",
            Self::Triangle => "triangle",
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Parallelepiped => "parallelepiped",
            Self::Pyramid => "pyramid",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Rhombus => "Rhombus",
            Self::Triangle => "Triangle",
            Self::Cube => "Cube",
            Self::Sphere => "Sphere",
            Self::Cylinder => "Cylinder",
            Self::Cone => "Cone",
            Self::Parallelepiped => "Parallelepiped",
            Self::Pyramid => "Pyramid",
        }
    }

    pub fn dimensionality(self) -> Dimensionality {
        match self {
            Self::Rectangle | Self::Square | Self::Circle | Self::Rhombus | Self::Triangle => {
                Dimensionality::Planar
            }
            Self::Cube
            | Self::Sphere
            | Self::Cylinder
            | Self::Cone
            | Self::Parallelepiped
            | Self::Pyramid => Dimensionality::Solid,
        }
    }

    /// Parameter declarations in declaration order.
    pub fn params(self) -> &'static [ParamSpec] {
        match self {
            Self::Rectangle => &[SIDE_A, SIDE_B],
            Self::Square => &[SIDE_A],
            Self::Circle => &[RADIUS],
            Self::Rhombus => &[SIDE_A, HEIGHT],
            Self::Triangle => &[SIDE_A, SIDE_B, SIDE_C],
            Self::Cube => &[EDGE_A],
            Self::Sphere => &[RADIUS],
            Self::Cylinder => &[RADIUS, HEIGHT],
            Self::Cone => &[RADIUS, HEIGHT],
            Self::Parallelepiped => &[EDGE_A, EDGE_B, EDGE_C],
            Self::Pyramid => &[BASE_EDGE, HEIGHT, BASE_SIDES],
        }
    }

    pub fn param(self, name: &str) -> Option<&'static ParamSpec> {
        self.params().iter().find(|spec| spec.name == name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShapeError::UnknownShape(s.to_owned()))
    }
}

/// A shape instance: one variant per [`ShapeKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
    Rhombus(Rhombus),
    Triangle(Triangle),
    Cube(Cube),
    Sphere(Sphere),
    Cylinder(Cylinder),
    Cone(Cone),
    Parallelepiped(Parallelepiped),
    Pyramid(Pyramid),
}

enum Variant<'a> {
    Planar(&'a dyn PlanarShape),
    Solid(&'a dyn SolidShape),
}

impl Shape {
    /// A shape of the given kind with every parameter unset (zero).
    pub fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::Rectangle(Rectangle::default()),
            ShapeKind::Square => Self::Square(Square::default()),
            ShapeKind::Circle => Self::Circle(Circle::default()),
            ShapeKind::Rhombus => Self::Rhombus(Rhombus::default()),
            ShapeKind::Triangle => Self::Triangle(Triangle::default()),
            ShapeKind::Cube => Self::Cube(Cube::default()),
            ShapeKind::Sphere => Self::Sphere(Sphere::default()),
            ShapeKind::Cylinder => Self::Cylinder(Cylinder::default()),
            ShapeKind::Cone => Self::Cone(Cone::default()),
            ShapeKind::Parallelepiped => Self::Parallelepiped(Parallelepiped::default()),
            ShapeKind::Pyramid => Self::Pyramid(Pyramid::default()),
        }
    }

    /// Construct a shape and assign the given parameters. Parameters not
    /// listed stay unset.
    pub fn from_params(kind: ShapeKind, params: &[(&str, f64)]) -> Result<Self, ShapeError> {
        let mut shape = Self::new(kind);
        for &(name, value) in params {
            shape.set(name, value)?;
        }
        Ok(shape)
    }

    fn variant(&self) -> Variant<'_> {
        match self {
            Self::Rectangle(s) => Variant::Planar(s),
            Self::Square(s) => Variant::Planar(s),
            Self::Circle(s) => Variant::Planar(s),
            Self::Rhombus(s) => Variant::Planar(s),
            Self::Triangle(s) => Variant::Planar(s),
            Self::Cube(s) => Variant::Solid(s),
            Self::Sphere(s) => Variant::Solid(s),
            Self::Cylinder(s) => Variant::Solid(s),
            Self::Cone(s) => Variant::Solid(s),
            Self::Parallelepiped(s) => Variant::Solid(s),
            Self::Pyramid(s) => Variant::Solid(s),
        }
    }

    fn geometry(&self) -> &dyn ShapeGeometry {
        match self {
            Self::Rectangle(s) => s,
            Self::Square(s) => s,
            Self::Circle(s) => s,
            Self::Rhombus(s) => s,
            Self::Triangle(s) => s,
            Self::Cube(s) => s,
            Self::Sphere(s) => s,
            Self::Cylinder(s) => s,
            Self::Cone(s) => s,
            Self::Parallelepiped(s) => s,
            Self::Pyramid(s) => s,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry().kind()
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.kind().dimensionality()
    }

    /// Current `(name, value)` record in declaration order.
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        self.kind()
            .params()
            .iter()
            .map(|spec| spec.name)
            .zip(self.geometry().values())
            .collect()
    }

    /// Assign one parameter by name.
    ///
    /// Real parameters accept any value here and are checked by `validate`.
    /// Integer parameters must be whole, non-negative numbers.
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), ShapeError> {
        let kind = self.kind();
        let slot = match (self, name) {
            (Self::Rectangle(s), "a") => &mut s.a,
            (Self::Rectangle(s), "b") => &mut s.b,
            (Self::Square(s), "a") => &mut s.a,
            (Self::Circle(s), "r") => &mut s.r,
            (Self::Rhombus(s), "a") => &mut s.a,
            (Self::Rhombus(s), "h") => &mut s.h,
            (Self::Triangle(s), "a") => &mut s.a,
            (Self::Triangle(s), "b") => &mut s.b,
            (Self::Triangle(s), "c") => &mut s.c,
            (Self::Cube(s), "a") => &mut s.a,
            (Self::Sphere(s), "r") => &mut s.r,
            (Self::Cylinder(s), "r") => &mut s.r,
            (Self::Cylinder(s), "h") => &mut s.h,
            (Self::Cone(s), "r") => &mut s.r,
            (Self::Cone(s), "h") => &mut s.h,
            (Self::Parallelepiped(s), "a") => &mut s.a,
            (Self::Parallelepiped(s), "b") => &mut s.b,
            (Self::Parallelepiped(s), "c") => &mut s.c,
            (Self::Pyramid(s), "a") => &mut s.a,
            (Self::Pyramid(s), "h") => &mut s.h,
            (Self::Pyramid(s), "n") => {
                s.n = BASE_SIDES.to_whole(value)?;
                return Ok(());
            }
            _ => {
                return Err(ShapeError::UnknownParameter {
                    kind,
                    name: name.to_owned(),
                });
            }
        };
        *slot = value;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), InvalidParameter> {
        self.geometry().validate()
    }

    /// Validate, then compute every metric with the standard formulas.
    pub fn compute_metrics(&self) -> Result<Metrics, InvalidParameter> {
        self.compute_metrics_with(&ModelConfig::default())
    }

    /// Validate, then compute every metric. Either all metrics are returned
    /// or the first violated constraint.
    #[instrument(level = "debug", skip(self, config), fields(kind = %self.kind()))]
    pub fn compute_metrics_with(&self, config: &ModelConfig) -> Result<Metrics, InvalidParameter> {
        self.validate()?;
        let metrics = match self.variant() {
            Variant::Planar(s) => s.metrics(),
            Variant::Solid(s) => s.metrics(config.formulas),
        };
        debug!(formulas = ?config.formulas, %metrics, "metrics computed");
        Ok(metrics)
    }

    /// Validated outline for planar shapes, `None` for solids.
    pub fn outline(&self) -> Result<Option<Outline>, InvalidParameter> {
        self.validate()?;
        Ok(match self.variant() {
            Variant::Planar(s) => Some(s.outline()),
            Variant::Solid(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormulaSet;
    use crate::metrics::MetricName;
    use approx::assert_relative_eq;

    /// Assign 1.0 to every parameter except the pyramid's side count.
    fn unit_shape(kind: ShapeKind) -> Shape {
        let mut shape = Shape::new(kind);
        for spec in kind.params() {
            let value = if spec.is_integer() { 4.0 } else { 1.0 };
            shape.set(spec.name, value).unwrap();
        }
        // Rhombus height must stay below the side.
        if kind == ShapeKind::Rhombus {
            shape.set("h", 0.5).unwrap();
        }
        shape
    }

    #[test]
    fn test_every_kind_round_trips_its_name() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
            assert_eq!(Shape::new(kind).kind(), kind);
        }
        assert_eq!("  Parallelepiped ".parse::<ShapeKind>().unwrap(), ShapeKind::Parallelepiped);
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(ShapeError::UnknownShape("hexagon".to_owned()))
        );
    }

    #[test]
    fn test_new_shape_fails_validation() {
        for kind in ShapeKind::ALL {
            let err = Shape::new(kind).compute_metrics().unwrap_err();
            assert_eq!(err, InvalidParameter::Zero { name: kind.params()[0].name });
        }
    }

    #[test]
    fn test_any_zero_parameter_fails() {
        for kind in ShapeKind::ALL {
            for spec in kind.params() {
                let mut shape = unit_shape(kind);
                assert!(shape.compute_metrics().is_ok(), "{kind} with unit parameters");
                shape.set(spec.name, 0.0).unwrap();
                assert_eq!(
                    shape.compute_metrics(),
                    Err(InvalidParameter::Zero { name: spec.name }),
                    "{kind}.{} = 0",
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_negative_and_non_finite_rejected() {
        let mut shape = unit_shape(ShapeKind::Cylinder);
        shape.set("h", -2.0).unwrap();
        assert_eq!(
            shape.validate(),
            Err(InvalidParameter::Negative { name: "h", value: -2.0 })
        );
        shape.set("h", f64::NAN).unwrap();
        assert_eq!(shape.validate(), Err(InvalidParameter::NonFinite { name: "h" }));
    }

    #[test]
    fn test_metric_order_by_dimensionality() {
        for kind in ShapeKind::ALL {
            let names = unit_shape(kind).compute_metrics().unwrap().names();
            let second = match kind.dimensionality() {
                Dimensionality::Planar => MetricName::Perimeter,
                Dimensionality::Solid => MetricName::Volume,
            };
            assert_eq!(names[0], MetricName::Area, "{kind}");
            assert_eq!(names[1], second, "{kind}");
        }
    }

    #[test]
    fn test_params_record_in_declaration_order() {
        let shape = Shape::from_params(ShapeKind::Pyramid, &[("n", 5.0), ("h", 2.0), ("a", 1.5)]).unwrap();
        assert_eq!(shape.params(), vec![("a", 1.5), ("h", 2.0), ("n", 5.0)]);
    }

    #[test]
    fn test_unknown_parameter() {
        let mut shape = Shape::new(ShapeKind::Circle);
        assert_eq!(
            shape.set("a", 1.0),
            Err(ShapeError::UnknownParameter {
                kind: ShapeKind::Circle,
                name: "a".to_owned()
            })
        );
    }

    #[test]
    fn test_integer_parameter_must_be_whole() {
        let mut shape = Shape::new(ShapeKind::Pyramid);
        let err = shape.set("n", 4.5).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidParameter(InvalidParameter::NotAnInteger { name: "n", .. })
        ));
    }

    #[test]
    fn test_failed_validation_leaves_no_partial_result() {
        let shape = Shape::from_params(ShapeKind::Triangle, &[("a", 1.0), ("b", 1.0), ("c", 3.0)]).unwrap();
        assert!(matches!(
            shape.compute_metrics(),
            Err(InvalidParameter::TriangleInequality { .. })
        ));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let shape = Shape::from_params(ShapeKind::Cone, &[("r", 2.0), ("h", 7.0)]).unwrap();
        assert_eq!(shape.compute_metrics().unwrap(), shape.compute_metrics().unwrap());
    }

    #[test]
    fn test_legacy_config_only_changes_cone_and_pyramid() {
        let legacy = ModelConfig::legacy();
        for kind in ShapeKind::ALL {
            let shape = unit_shape(kind);
            let standard = shape.compute_metrics().unwrap();
            let old = shape.compute_metrics_with(&legacy).unwrap();
            match kind {
                ShapeKind::Cone | ShapeKind::Pyramid => assert_ne!(standard, old, "{kind}"),
                _ => assert_eq!(standard, old, "{kind}"),
            }
        }
    }

    #[test]
    fn test_cone_through_shape_dispatch() {
        let shape = Shape::from_params(ShapeKind::Cone, &[("r", 3.0), ("h", 4.0)]).unwrap();
        let standard = shape.compute_metrics().unwrap();
        let legacy = shape
            .compute_metrics_with(&ModelConfig { formulas: FormulaSet::Legacy })
            .unwrap();
        assert_relative_eq!(
            standard.get(MetricName::Volume).unwrap(),
            legacy.get(MetricName::Area).unwrap()
        );
        assert_relative_eq!(
            standard.get(MetricName::Area).unwrap(),
            legacy.get(MetricName::Volume).unwrap()
        );
    }

    #[test]
    fn test_outline_only_for_planar_shapes() {
        for kind in ShapeKind::ALL {
            let outline = unit_shape(kind).outline().unwrap();
            assert_eq!(outline.is_some(), kind.dimensionality() == Dimensionality::Planar, "{kind}");
        }
        assert!(Shape::new(ShapeKind::Square).outline().is_err());
    }
}
