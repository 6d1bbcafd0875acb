use std::fmt;

use serde::{Serialize, Serializer};

/// Name of a computed metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricName {
    /// Plane area for planar shapes, total surface area for solids.
    Area,
    Perimeter,
    Volume,
    Diagonal,
    /// Median to side c (triangles).
    Median,
    Diameter,
}

impl MetricName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Perimeter => "perimeter",
            Self::Volume => "volume",
            Self::Diagonal => "diagonal",
            Self::Median => "median",
            Self::Diameter => "diameter",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered metric name → value mapping produced by one computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    entries: Vec<(MetricName, f64)>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a metric. An existing entry keeps its position and takes the
    /// new value.
    pub fn insert(&mut self, name: MetricName, value: f64) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: MetricName) -> Option<f64> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricName, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn names(&self) -> Vec<MetricName> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, value)| (name.as_str(), *value)))
    }
}

/// One `name: value` line per metric, two decimals.
impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            writeln!(f, "{name}: {value:.2}")?;
        }
        Ok(())
    }
}
