use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::{GeoResolveError, Result};

/// Default filter when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "georesolve=debug"
    } else {
        "warn"
    }
}

/// Log destination: a freshly created file when `log_file` is given, stderr otherwise
pub fn log_writer(log_file: Option<&Path>) -> Result<BoxMakeWriter> {
    Ok(match log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(std::io::stderr),
    })
}

/// Install the global subscriber; logs go to stderr unless `log_file` is given
pub fn init_logging(verbose: bool, log_file: Option<&Path>, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(log_file.is_none())
        .with_writer(log_writer(log_file)?);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| GeoResolveError::Logging(e.to_string()))
}
