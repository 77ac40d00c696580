//! `json-sort` - command-line front end for canonical key ordering.
//!
//! Provides the logic used by the `json-sort` binary:
//! - default     - print the compact canonical encoding of stdin
//! - `--pretty`  - print the indented canonical encoding
//! - `--check`   - print nothing; report whether stdin is already canonical

use std::io::Read;

use jws_json_value::{JsonObject, JsonValue};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::canonical::{to_canonical_string, to_canonical_string_pretty};
use crate::error::SortError;
use crate::sort::{is_sorted, sort};

/// Environment variable holding the `tracing` filter for the binary.
pub const LOG_ENV: &str = "JWS_JSON_LOG";

pub const USAGE: &str = "Usage: json-sort [--pretty] [--check] < input.json";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Sort(#[from] SortError),
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Io(_) | CliError::Sort(_) => 1,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub pretty: bool,
    pub check: bool,
}

impl CliOptions {
    /// Parse flags, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut options = CliOptions::default();
        for arg in args {
            match arg.as_ref() {
                "--pretty" => options.pretty = true,
                "--check" => options.check = true,
                other => return Err(CliError::Usage(format!("Unknown argument: {other}"))),
            }
        }
        Ok(options)
    }
}

// ── Run ───────────────────────────────────────────────────────────────────

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Canonical text to print.
    Output(String),
    /// `--check`: input already canonical.
    Canonical,
    /// `--check`: input needs reordering or has duplicate keys.
    NotCanonical,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Output(_) | Outcome::Canonical => 0,
            Outcome::NotCanonical => 1,
        }
    }
}

/// Read the whole input document.
pub fn read_input<R: Read>(mut reader: R) -> Result<String, CliError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Canonicalize (or check) one JSON object given as text.
pub fn run(input: &str, options: &CliOptions) -> Result<Outcome, CliError> {
    let obj = JsonObject::from_json_str(input).map_err(SortError::from)?;
    debug!(entries = obj.len(), "read object");

    if options.check {
        let canonical = is_sorted(&obj);
        debug!(canonical, "checked key order");
        return Ok(if canonical {
            Outcome::Canonical
        } else {
            Outcome::NotCanonical
        });
    }

    let sorted = sort(&obj);
    let dropped = count_entries(&obj) - count_entries(&sorted);
    if dropped > 0 {
        warn!(dropped, "duplicate keys collapsed, last occurrence kept");
    }

    let text = if options.pretty {
        to_canonical_string_pretty(&sorted)?
    } else {
        to_canonical_string(&sorted)?
    };
    Ok(Outcome::Output(text))
}

/// Install a stderr `tracing` subscriber filtered by [`LOG_ENV`], `warn` by
/// default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entries in `obj` and in every object reachable through object values.
fn count_entries(obj: &JsonObject) -> usize {
    obj.iter()
        .map(|entry| match entry.value() {
            JsonValue::Object(inner) => 1 + count_entries(inner),
            _ => 1,
        })
        .sum()
}
