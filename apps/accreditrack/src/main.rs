//! # AccrediTrack - Accreditation Readiness Server
//!
//! The main binary for AccrediTrack.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for documents and readiness
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                apps/accreditrack (THE BINARY)            │
//! │                                                          │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐  │
//! │  │   CLI       │    │   HTTP API  │    │   Config    │  │
//! │  │  (clap)     │    │   (axum)    │    │   (toml)    │  │
//! │  └──────┬──────┘    └──────┬──────┘    └──────┬──────┘  │
//! │         └──────────────────┼──────────────────┘         │
//! │                            ▼                            │
//! │                 ┌────────────────────┐                  │
//! │                 │  accreditrack-core │                  │
//! │                 │    (THE LOGIC)     │                  │
//! │                 └────────────────────┘                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! accreditrack server --host 0.0.0.0 --port 5000
//!
//! # CLI operations
//! accreditrack readiness
//! accreditrack upload --title "Syllabus" --criterion C1 --item "Curriculum plan & syllabus"
//! accreditrack documents --search lab
//! ```

use accreditrack::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // ACCREDITRACK_LOG_FORMAT=json switches to JSON lines. Logs always go to
    // stderr so stdout stays clean for --json-mode output.
    let log_format =
        std::env::var("ACCREDITRACK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "accreditrack=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
   AccrediTrack v{}
   Accreditation readiness, criterion by criterion
"#,
        env!("CARGO_PKG_VERSION")
    );
}
