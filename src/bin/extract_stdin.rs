//! Simple CLI that reads HTML from stdin and prints a status report as JSON.
//!
//! Usage: `extract_stdin <max-idx|detail|meta|update-tag> < page.html`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};
use std::process::ExitCode;

use rs_postmeta::boundary::{Operation, Report};
use rs_postmeta::Options;
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    status: i32,
    result: Option<Value>,
}

/// Report as the `{"status": .., "result": ..}` line printed to stdout.
fn render(report: Report) -> serde_json::Result<String> {
    serde_json::to_string(&Output {
        status: report.code(),
        result: report.payload,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("usage: extract_stdin <max-idx|detail|meta|update-tag> < page.html");
        return ExitCode::from(2);
    };
    let operation = match arg.parse::<Operation>() {
        Ok(op) => op,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let report = operation.run_bytes(&html, &Options::default());
    tracing::info!(%operation, status = report.code(), "done");

    match render(report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize report: {err}");
            ExitCode::FAILURE
        }
    }
}
