//! geocalc: command-line geometry calculator.
//!
//! Select a shape, give its parameters as `name=value` pairs, and get its
//! area, perimeter or volume and shape-specific extras. Planar shapes can
//! also be drawn to an SVG file.
//!
//! # Logging
//!
//! Set `RUST_LOG` to control log output, or pass `-v` / `-vv`:
//! - `RUST_LOG=geocalc_kernel=debug` - computed metrics per call
//!
//! # Example
//!
//! ```bash
//! geocalc calc triangle a=3 b=4 c=5
//! geocalc calc rectangle a=3 b=4 --svg rect.svg
//! geocalc --format json calc pyramid a=2 h=3 n=4
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use geocalc_kernel::{InvalidParameter, ShapeError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod config;
mod input;
mod output;

use commands::{calc, list};

/// geocalc - compute metrics of planar and solid shapes.
#[derive(Parser)]
#[command(name = "geocalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available shapes and their parameters
    List,

    /// Compute the metrics of a shape
    Calc {
        /// Shape name (rectangle, square, circle, rhombus, triangle, cube,
        /// sphere, cylinder, cone, parallelepiped, pyramid)
        shape: String,

        /// Parameters as name=value pairs, e.g. a=3 b=4
        params: Vec<String>,

        /// Write the 2D outline of a planar shape to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Use the legacy cone and pyramid formulas
        #[arg(long)]
        legacy_formulas: bool,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG takes precedence over -v flags.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "geocalc=info,geocalc_kernel=info,geocalc_render=info",
            2 => "geocalc=debug,geocalc_kernel=debug,geocalc_render=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

/// Name of the parameter a failed computation is about, if any.
fn offending_parameter(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(invalid) = cause.downcast_ref::<InvalidParameter>() {
            invalid.parameter()
        } else if let Some(ShapeError::InvalidParameter(invalid)) = cause.downcast_ref::<ShapeError>() {
            invalid.parameter()
        } else {
            None
        }
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = config::CliConfig::load(cli.config.as_deref()).and_then(|mut cfg| match &cli.command {
        Commands::List => list::run(&cli),
        Commands::Calc {
            shape,
            params,
            svg,
            legacy_formulas,
        } => {
            if *legacy_formulas {
                cfg.model = geocalc_kernel::ModelConfig::legacy();
            }
            calc::run(shape, params, svg.as_deref(), &cfg, &cli)
        }
    });

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
            if let Some(name) = offending_parameter(e) {
                eprintln!("  Check the value given for {name}");
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offending_parameter_from_model_errors() {
        let err = anyhow::Error::from(InvalidParameter::RhombusHeight { a: 5.0, h: 6.0 });
        assert_eq!(offending_parameter(&err), Some("h"));

        let err = anyhow::Error::from(ShapeError::from(InvalidParameter::Zero { name: "r" }));
        assert_eq!(offending_parameter(&err), Some("r"));

        let err = anyhow::Error::from(InvalidParameter::TriangleInequality { a: 1.0, b: 1.0, c: 3.0 });
        assert_eq!(offending_parameter(&err), None);

        let err = anyhow::anyhow!("unrelated");
        assert_eq!(offending_parameter(&err), None);
    }
}
