//! cephcluster-admission - offline CephCluster admission check.
//!
//! This is the main entry point that:
//! - Initializes structured logging (JSON on stderr)
//! - Reads one AdmissionReview from a file or stdin
//! - Writes the response AdmissionReview to stdout

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use thiserror::Error;
use tracing::info;

use cephcluster_admission::ClusterValidator;
use cephcluster_admission::crd::CephCluster;
use cephcluster_admission::webhooks::{AdmissionReview, review};

/// Filter directive applied on top of `RUST_LOG`
const DEFAULT_LOG_DIRECTIVE: &str = "cephcluster_admission=info";

/// Argument selecting stdin as input
const STDIN_MARKER: &str = "-";

/// Errors that can occur when running the admission check
#[derive(Error, Debug)]
enum CliError {
    /// Input could not be opened or output could not be written
    #[error("I/O error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Input is not a CephCluster AdmissionReview
    #[error("Malformed AdmissionReview: {0}")]
    Decode(#[source] serde_json::Error),

    /// Response could not be serialized
    #[error("Failed to write AdmissionReview: {0}")]
    Encode(#[source] serde_json::Error),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_writer(io::stderr)
        .json()
        .init();

    let source = std::env::args().nth(1);
    run(source.as_deref())?;
    Ok(())
}

fn run(source: Option<&str>) -> Result<(), CliError> {
    let input: Box<dyn Read> = match source {
        None | Some(STDIN_MARKER) => Box::new(io::stdin().lock()),
        Some(path) => Box::new(File::open(path).map_err(|source| CliError::Io {
            target: path.to_string(),
            source,
        })?),
    };

    let request: AdmissionReview<CephCluster> =
        serde_json::from_reader(BufReader::new(input)).map_err(CliError::Decode)?;

    let validator = ClusterValidator::from_current();
    let response = review(&validator, request);
    info!(
        allowed = response.response.as_ref().is_some_and(|r| r.allowed),
        "Admission review answered"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer(&mut out, &response).map_err(CliError::Encode)?;
    writeln!(out)
        .and_then(|()| out.flush())
        .map_err(|source| CliError::Io {
            target: "stdout".to_string(),
            source,
        })?;
    Ok(())
}
