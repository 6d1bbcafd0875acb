use serde::Serialize;

use crate::OutputFormat;

/// Pretty JSON for a serializable result.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Print a serializable result as pretty JSON.
///
/// Text output is formatted by each command; this only handles the
/// machine-readable path.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Json => match to_json(value) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize output"),
        },
        OutputFormat::Text => {}
    }
}
