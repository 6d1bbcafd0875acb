//! Planar shapes.

use std::f64::consts::{PI, SQRT_2};

use nalgebra::Point2;

use super::ShapeKind;
use crate::error::InvalidParameter;
use crate::metrics::{MetricName, Metrics};
use crate::outline::Outline;
use crate::traits::{PlanarShape, ShapeGeometry};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    pub a: f64,
    pub b: f64,
}

impl Rectangle {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn diagonal(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl ShapeGeometry for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn values(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }

    fn area(&self) -> f64 {
        self.a * self.b
    }

    fn extra_metrics(&self, metrics: &mut Metrics) {
        metrics.insert(MetricName::Diagonal, self.diagonal());
    }
}

impl PlanarShape for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.a + self.b)
    }

    fn outline(&self) -> Outline {
        Outline::Polygon(vec![
            Point2::new(0.0, 0.0),
            Point2::new(self.a, 0.0),
            Point2::new(self.a, self.b),
            Point2::new(0.0, self.b),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Square {
    pub a: f64,
}

impl Square {
    pub fn new(a: f64) -> Self {
        Self { a }
    }

    pub fn diagonal(&self) -> f64 {
        self.a * SQRT_2
    }
}

impl ShapeGeometry for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn values(&self) -> Vec<f64> {
        vec![self.a]
    }

    fn area(&self) -> f64 {
        self.a.powi(2)
    }

    fn extra_metrics(&self, metrics: &mut Metrics) {
        metrics.insert(MetricName::Diagonal, self.diagonal());
    }
}

impl PlanarShape for Square {
    fn perimeter(&self) -> f64 {
        4.0 * self.a
    }

    fn outline(&self) -> Outline {
        Rectangle::new(self.a, self.a).outline()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    pub r: f64,
}

impl Circle {
    pub fn new(r: f64) -> Self {
        Self { r }
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.r
    }
}

impl ShapeGeometry for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn values(&self) -> Vec<f64> {
        vec![self.r]
    }

    fn area(&self) -> f64 {
        PI * self.r.powi(2)
    }

    fn extra_metrics(&self, metrics: &mut Metrics) {
        metrics.insert(MetricName::Diameter, self.diameter());
    }
}

impl PlanarShape for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.r
    }

    /// Circle touching both axes, matching the rectangle's placement.
    fn outline(&self) -> Outline {
        Outline::Circle {
            center: Point2::new(self.r, self.r),
            radius: self.r,
        }
    }
}

/// Rhombus given by side `a` and height `h`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rhombus {
    pub a: f64,
    pub h: f64,
}

impl Rhombus {
    pub fn new(a: f64, h: f64) -> Self {
        Self { a, h }
    }

    /// Horizontal offset of the top edge relative to the bottom edge.
    fn shear(&self) -> f64 {
        (self.a.powi(2) - self.h.powi(2)).sqrt()
    }
}

impl ShapeGeometry for Rhombus {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rhombus
    }

    fn values(&self) -> Vec<f64> {
        vec![self.a, self.h]
    }

    fn area(&self) -> f64 {
        self.a * self.h
    }

    /// The height cannot reach the side length; `h == a` would be a square,
    /// which has its own kind.
    fn check_constraints(&self) -> Result<(), InvalidParameter> {
        if self.h >= self.a {
            return Err(InvalidParameter::RhombusHeight { a: self.a, h: self.h });
        }
        Ok(())
    }
}

impl PlanarShape for Rhombus {
    fn perimeter(&self) -> f64 {
        4.0 * self.a
    }

    fn outline(&self) -> Outline {
        let x = self.shear();
        Outline::Polygon(vec![
            Point2::new(0.0, 0.0),
            Point2::new(self.a, 0.0),
            Point2::new(self.a + x, self.h),
            Point2::new(x, self.h),
        ])
    }
}

/// Triangle given by its three sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Heron's formula in Kahan's sorted-side arrangement, which keeps
    /// needle-like triangles accurate. Sides within rounding of the
    /// inequality bound still come out as zero area.
    fn heron(&self) -> f64 {
        let mut sides = [self.a, self.b, self.c];
        sides.sort_by(|x, y| y.total_cmp(x));
        let [a, b, c] = sides;
        let product = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
        0.25 * product.max(0.0).sqrt()
    }

    /// Height onto side `b`, from Heron's formula.
    pub fn height_to_b(&self) -> f64 {
        2.0 * self.heron() / self.b
    }

    /// Median drawn to side `c`.
    pub fn median(&self) -> f64 {
        0.5 * (2.0 * self.a.powi(2) + 2.0 * self.b.powi(2) - self.c.powi(2)).sqrt()
    }
}

impl ShapeGeometry for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn values(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn area(&self) -> f64 {
        self.height_to_b() * self.b / 2.0
    }

    fn check_constraints(&self) -> Result<(), InvalidParameter> {
        let Self { a, b, c } = *self;
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(InvalidParameter::TriangleInequality { a, b, c });
        }
        Ok(())
    }

    fn extra_metrics(&self, metrics: &mut Metrics) {
        metrics.insert(MetricName::Median, self.median());
    }
}

impl PlanarShape for Triangle {
    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Side `a` along the x axis, side `b` from the origin to the apex,
    /// apex placed by the law of cosines.
    fn outline(&self) -> Outline {
        let x3 = (self.a.powi(2) + self.b.powi(2) - self.c.powi(2)) / (2.0 * self.a);
        let y3 = (self.b.powi(2) - x3.powi(2)).max(0.0).sqrt();
        Outline::Polygon(vec![
            Point2::new(0.0, 0.0),
            Point2::new(self.a, 0.0),
            Point2::new(x3, y3),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_rectangle_3_4() {
        let m = Rectangle::new(3.0, 4.0).metrics();
        assert_relative_eq!(m.get(MetricName::Area).unwrap(), 12.0);
        assert_relative_eq!(m.get(MetricName::Perimeter).unwrap(), 14.0);
        assert_relative_eq!(m.get(MetricName::Diagonal).unwrap(), 5.0);
        assert_eq!(
            m.names(),
            vec![MetricName::Area, MetricName::Perimeter, MetricName::Diagonal]
        );
    }

    #[test]
    fn test_square_5() {
        let m = Square::new(5.0).metrics();
        assert_relative_eq!(m.get(MetricName::Area).unwrap(), 25.0);
        assert_relative_eq!(m.get(MetricName::Perimeter).unwrap(), 20.0);
        assert_abs_diff_eq!(m.get(MetricName::Diagonal).unwrap(), 7.07, epsilon = 0.005);
    }

    #[test]
    fn test_circle_2() {
        let m = Circle::new(2.0).metrics();
        assert_abs_diff_eq!(m.get(MetricName::Area).unwrap(), 12.57, epsilon = 0.005);
        assert_abs_diff_eq!(m.get(MetricName::Perimeter).unwrap(), 12.57, epsilon = 0.005);
        assert_relative_eq!(m.get(MetricName::Diameter).unwrap(), 4.0);
    }

    #[test]
    fn test_triangle_3_4_5() {
        let t = Triangle::new(3.0, 4.0, 5.0);
        assert!(t.validate().is_ok());
        let m = t.metrics();
        assert_relative_eq!(m.get(MetricName::Area).unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(m.get(MetricName::Perimeter).unwrap(), 12.0);
        assert_relative_eq!(m.get(MetricName::Median).unwrap(), 2.5);
        assert_relative_eq!(t.height_to_b(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_needle_triangle_area() {
        // Kahan's example: s(s-a)(s-b)(s-c) is just under 100.
        let t = Triangle::new(100000.0, 99999.99979, 0.00029);
        assert!(t.validate().is_ok());
        assert_relative_eq!(t.area(), 10.0, max_relative = 1e-6);

        // Rounding can still collapse the area; it never goes negative or NaN.
        let t = Triangle::new(41.94818007857116, 117.71052065282365, 159.6587007313948);
        let area = t.metrics().get(MetricName::Area).unwrap();
        assert!(area.is_finite() && area >= 0.0);
    }

    #[test]
    fn test_triangle_inequality_is_strict() {
        let err = Triangle::new(1.0, 1.0, 3.0).validate().unwrap_err();
        assert!(matches!(err, InvalidParameter::TriangleInequality { .. }));
        // Degenerate: a + b == c.
        assert!(Triangle::new(1.0, 2.0, 3.0).validate().is_err());
        assert!(Triangle::new(3.0, 1.0, 2.0).validate().is_err());
        assert!(Triangle::new(2.0, 3.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_triangle_zero_side_reported_before_inequality() {
        let err = Triangle::new(3.0, 0.0, 5.0).validate().unwrap_err();
        assert_eq!(err, InvalidParameter::Zero { name: "b" });
    }

    #[test]
    fn test_rhombus_height_must_be_below_side() {
        let err = Rhombus::new(5.0, 6.0).validate().unwrap_err();
        assert_eq!(err, InvalidParameter::RhombusHeight { a: 5.0, h: 6.0 });
        assert!(Rhombus::new(5.0, 5.0).validate().is_err());
        let ok = Rhombus::new(5.0, 4.0);
        assert!(ok.validate().is_ok());
        assert_relative_eq!(ok.area(), 20.0);
        assert_relative_eq!(ok.perimeter(), 20.0);
    }

    #[test]
    fn test_rhombus_outline_sides_equal_a() {
        let outline = Rhombus::new(5.0, 4.0).outline();
        for len in outline.edge_lengths() {
            assert_relative_eq!(len, 5.0, epsilon = 1e-12);
        }
        let (_, max) = outline.bounds();
        assert_relative_eq!(max.y, 4.0);
        assert_relative_eq!(max.x, 8.0);
    }

    #[test]
    fn test_triangle_outline_matches_sides() {
        let outline = Triangle::new(3.0, 4.0, 5.0).outline();
        // Edges: origin→(a,0) = a, (a,0)→apex = c, apex→origin = b.
        let lengths = outline.edge_lengths();
        assert_relative_eq!(lengths[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[1], 5.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[2], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_square_outline_is_rectangle() {
        assert_eq!(Square::new(2.0).outline(), Rectangle::new(2.0, 2.0).outline());
    }
}
