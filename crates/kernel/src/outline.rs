//! 2D drawing data for planar shapes.

use nalgebra::Point2;

/// Outline of a planar shape in model coordinates (y up).
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Closed polygon; the first vertex is not repeated at the end.
    Polygon(Vec<Point2<f64>>),
    Circle { center: Point2<f64>, radius: f64 },
}

impl Outline {
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Polygon(points) => points.len(),
            Self::Circle { .. } => 0,
        }
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Point2<f64>, Point2<f64>) {
        match self {
            Self::Polygon(points) => {
                let mut min = Point2::new(f64::MAX, f64::MAX);
                let mut max = Point2::new(f64::MIN, f64::MIN);
                for p in points {
                    min.x = min.x.min(p.x);
                    min.y = min.y.min(p.y);
                    max.x = max.x.max(p.x);
                    max.y = max.y.max(p.y);
                }
                (min, max)
            }
            Self::Circle { center, radius } => (
                Point2::new(center.x - radius, center.y - radius),
                Point2::new(center.x + radius, center.y + radius),
            ),
        }
    }

    /// Length of the boundary.
    pub fn length(&self) -> f64 {
        match self {
            Self::Polygon(_) => self.edge_lengths().iter().sum(),
            Self::Circle { radius, .. } => std::f64::consts::TAU * radius,
        }
    }

    /// Edge lengths in vertex order, closing edge last. Empty for circles.
    pub fn edge_lengths(&self) -> Vec<f64> {
        match self {
            Self::Polygon(points) => points
                .iter()
                .zip(points.iter().cycle().skip(1))
                .map(|(a, b)| nalgebra::distance(a, b))
                .collect(),
            Self::Circle { .. } => Vec::new(),
        }
    }
}
