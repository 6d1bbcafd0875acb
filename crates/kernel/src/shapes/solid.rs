//! Solid shapes.

use std::f64::consts::PI;

use super::ShapeKind;
use crate::metrics::{MetricName, Metrics};
use crate::traits::{ShapeGeometry, SolidShape};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cube {
    pub a: f64,
}

impl Cube {
    pub fn new(a: f64) -> Self {
        Self { a }
    }

    /// Space diagonal.
    pub fn diagonal(&self) -> f64 {
        self.a * 3f64.sqrt()
    }
}

impl ShapeGeometry for Cube {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cube
    }

    fn values(&self) -> Vec<f64> {
        vec![self.a]
    }

    fn area(&self) -> f64 {
        6.0 * self.a.powi(2)
    }

    fn extra_metrics(&self, metrics: &mut Metrics) {
        metrics.insert(MetricName::Diagonal, self.diagonal());
    }
}

impl SolidShape for Cube {
    fn volume(&self) -> f64 {
        self.a.powi(3)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere {
    pub r: f64,
}

impl Sphere {
    pub fn new(r: f64) -> Self {
        Self { r }
    }
}

impl ShapeGeometry for Sphere {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Sphere
    }

    fn values(&self) -> Vec<f64> {
        vec![self.r]
    }

    fn area(&self) -> f64 {
        4.0 * PI * self.r.powi(2)
    }
}

impl SolidShape for Sphere {
    fn volume(&self) -> f64 {
        4.0 * PI * self.r.powi(3) / 3.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cylinder {
    pub r: f64,
    pub h: f64,
}

impl Cylinder {
    pub fn new(r: f64, h: f64) -> Self {
        Self { r, h }
    }
}

impl ShapeGeometry for Cylinder {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cylinder
    }

    fn values(&self) -> Vec<f64> {
        vec![self.r, self.h]
    }

    /// Two caps plus the lateral surface.
    fn area(&self) -> f64 {
        2.0 * PI * self.r.powi(2) + 2.0 * PI * self.r * self.h
    }
}

impl SolidShape for Cylinder {
    fn volume(&self) -> f64 {
        PI * self.r.powi(2) * self.h
    }
}

/// Right circular cone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cone {
    pub r: f64,
    pub h: f64,
}

impl Cone {
    pub fn new(r: f64, h: f64) -> Self {
        Self { r, h }
    }

    pub fn slant(&self) -> f64 {
        self.r.hypot(self.h)
    }
}

impl ShapeGeometry for Cone {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cone
    }

    fn values(&self) -> Vec<f64> {
        vec![self.r, self.h]
    }

    /// Base plus lateral surface.
    fn area(&self) -> f64 {
        PI * self.r.powi(2) + PI * self.r * self.slant()
    }
}

impl SolidShape for Cone {
    fn volume(&self) -> f64 {
        PI * self.r.powi(2) * self.h / 3.0
    }

    // Legacy formula set reports the two quantities under each other's names.
    fn legacy_area(&self) -> f64 {
        self.volume()
    }

    fn legacy_volume(&self) -> f64 {
        self.area()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parallelepiped {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Parallelepiped {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn diagonal(&self) -> f64 {
        (self.a.powi(2) + self.b.powi(2) + self.c.powi(2)).sqrt()
    }
}

impl ShapeGeometry for Parallelepiped {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Parallelepiped
    }

    fn values(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn area(&self) -> f64 {
        2.0 * (self.a * self.b + self.b * self.c + self.a * self.c)
    }

    fn extra_metrics(&self, metrics: &mut Metrics) {
        metrics.insert(MetricName::Diagonal, self.diagonal());
    }
}

impl SolidShape for Parallelepiped {
    fn volume(&self) -> f64 {
        self.a * self.b * self.c
    }
}

/// Right pyramid over a regular `n`-gon with edge `a` and height `h`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pyramid {
    pub a: f64,
    pub h: f64,
    pub n: u32,
}

impl Pyramid {
    pub fn new(a: f64, h: f64, n: u32) -> Self {
        Self { a, h, n }
    }

    fn sides(&self) -> f64 {
        f64::from(self.n)
    }

    /// Inradius of the base polygon.
    pub fn apothem(&self) -> f64 {
        self.a / (2.0 * (PI / self.sides()).tan())
    }

    pub fn base_area(&self) -> f64 {
        self.sides() * self.a * self.apothem() / 2.0
    }

    /// Height of each lateral face.
    pub fn slant(&self) -> f64 {
        self.h.hypot(self.apothem())
    }

    /// Legacy base: `n` equilateral triangles of side `a`.
    fn legacy_base_area(&self) -> f64 {
        let x = (self.a.powi(2) - (self.a / 2.0).powi(2)).sqrt();
        self.a * self.sides() * x / 2.0
    }
}

impl ShapeGeometry for Pyramid {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Pyramid
    }

    fn values(&self) -> Vec<f64> {
        vec![self.a, self.h, self.sides()]
    }

    fn area(&self) -> f64 {
        self.base_area() + self.sides() * self.a * self.slant() / 2.0
    }
}

impl SolidShape for Pyramid {
    fn volume(&self) -> f64 {
        self.base_area() * self.h / 3.0
    }

    fn legacy_area(&self) -> f64 {
        let face_height = (self.a.powi(2) + self.h.powi(2) - (self.a / 2.0).powi(2)).sqrt();
        self.legacy_base_area() + self.sides() * self.a * face_height / 2.0
    }

    fn legacy_volume(&self) -> f64 {
        self.legacy_base_area() * self.h / 3.0
    }
}
