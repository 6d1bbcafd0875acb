//! geocalc list command - show available shapes.

use anyhow::Result;
use geocalc_kernel::{Dimensionality, ParamKind, ParamSpec, ShapeKind};
use serde::Serialize;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct ShapeInfo {
    name: &'static str,
    title: &'static str,
    dimensionality: Dimensionality,
    params: &'static [ParamSpec],
}

fn describe(spec: &ParamSpec) -> String {
    match spec.kind {
        ParamKind::Real => format!("{} ({})", spec.name, spec.label),
        ParamKind::Integer { min, max } => format!("{} ({}, {min}..={max})", spec.name, spec.label),
    }
}

fn shapes() -> Vec<ShapeInfo> {
    ShapeKind::ALL
        .into_iter()
        .map(|kind| ShapeInfo {
            name: kind.name(),
            title: kind.title(),
            dimensionality: kind.dimensionality(),
            params: kind.params(),
        })
        .collect()
}

pub fn run(cli: &Cli) -> Result<()> {
    let shapes = shapes();

    match cli.format {
        OutputFormat::Json => output::print(&shapes, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                for shape in &shapes {
                    let dim = match shape.dimensionality {
                        Dimensionality::Planar => "2D",
                        Dimensionality::Solid => "3D",
                    };
                    let params: Vec<String> = shape.params.iter().map(describe).collect();
                    println!("{:<15} {dim}  {}", shape.name, params.join(", "));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_integer_bounds() {
        let sides = ShapeKind::Pyramid.param("n").unwrap();
        assert_eq!(describe(sides), "n (base sides n, 3..=10)");
        let radius = ShapeKind::Circle.param("r").unwrap();
        assert_eq!(describe(radius), "r (radius r)");
    }

    #[test]
    fn test_json_entries() {
        let json = output::to_json(&shapes()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 11);

        let pyramid = &entries[10];
        assert_eq!(pyramid["name"], "pyramid");
        assert_eq!(pyramid["dimensionality"], "solid");
        assert_eq!(pyramid["params"][2]["name"], "n");
        assert_eq!(
            pyramid["params"][2]["kind"],
            serde_json::json!({"type": "integer", "min": 3, "max": 10})
        );
        assert_eq!(entries[0]["params"][0]["kind"], serde_json::json!({"type": "real"}));
    }
}
