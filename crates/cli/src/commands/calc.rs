//! geocalc calc command - compute shape metrics.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geocalc_kernel::{FormulaSet, Metrics, Shape, ShapeError, ShapeKind};
use geocalc_render::outline_to_svg;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::input::{InputError, InputRule, parse_assignment, parse_param};
use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct CalcReport<'a> {
    shape: ShapeKind,
    formulas: FormulaSet,
    params: Vec<ParamValue>,
    metrics: &'a Metrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    svg: Option<String>,
}

#[derive(Serialize)]
struct ParamValue {
    name: &'static str,
    value: f64,
}

impl<'a> CalcReport<'a> {
    fn new(shape: &Shape, metrics: &'a Metrics, formulas: FormulaSet, svg: Option<String>) -> Self {
        Self {
            shape: shape.kind(),
            formulas,
            params: shape
                .params()
                .into_iter()
                .map(|(name, value)| ParamValue { name, value })
                .collect(),
            metrics,
            svg,
        }
    }
}

/// Build a shape from `name=value` arguments. Empty values leave the
/// parameter unset; naming a parameter twice is an error.
pub fn build_shape(kind: ShapeKind, assignments: &[String], rule: &InputRule) -> Result<Shape> {
    let mut shape = Shape::new(kind);
    let mut seen: Vec<&str> = Vec::with_capacity(assignments.len());
    for arg in assignments {
        let (name, text) = parse_assignment(arg)?;
        let spec = kind.param(name).ok_or_else(|| ShapeError::UnknownParameter {
            kind,
            name: name.to_owned(),
        })?;
        if seen.contains(&spec.name) {
            return Err(InputError::DuplicateParameter(spec.name.to_owned()).into());
        }
        seen.push(spec.name);
        let value = parse_param(text, &rule.for_spec(spec))
            .with_context(|| format!("Invalid value for parameter {name}"))?;
        if let Some(value) = value {
            shape.set(name, value)?;
        }
    }
    Ok(shape)
}

pub fn run(
    shape_name: &str,
    assignments: &[String],
    svg: Option<&Path>,
    config: &CliConfig,
    cli: &Cli,
) -> Result<()> {
    let kind: ShapeKind = shape_name.parse()?;
    let shape = build_shape(kind, assignments, &config.input)?;
    let metrics = shape.compute_metrics_with(&config.model)?;

    let mut svg_written = None;
    if let Some(path) = svg {
        match shape.outline()? {
            Some(outline) => {
                let title = format!("{} ({})", kind.title(), format_params(&shape));
                let doc = outline_to_svg(&outline, config.svg.width, config.svg.height, &title);
                fs::write(path, doc)
                    .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
                info!(path = %path.display(), "outline written");
                svg_written = Some(path.display().to_string());
            }
            None => warn!(%kind, "solid shapes have no 2D outline; skipping SVG"),
        }
    }

    let report = CalcReport::new(&shape, &metrics, config.model.formulas, svg_written);

    match cli.format {
        OutputFormat::Json => output::print(&report, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{} ({})", kind.title(), format_params(&shape));
                print!("{metrics}");
                if let Some(path) = &report.svg {
                    println!("outline: {path}");
                }
            }
        }
    }

    Ok(())
}

fn format_params(shape: &Shape) -> String {
    let parts: Vec<String> = shape
        .params()
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    parts.join(", ")
}
