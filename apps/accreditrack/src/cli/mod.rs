//! # AccrediTrack CLI Module
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `criteria` - List the checklist catalog
//! - `documents` - List or search document records
//! - `upload` - Create a document record
//! - `delete` - Delete a document record
//! - `readiness` - Show the readiness dashboard (default)
//! - `login` - Issue a display session
//! - `init` - Initialize a new store

mod commands;

use crate::config::{AppConfig, Backend};
use accreditrack_core::{AccreditError, NewDocument};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// AccrediTrack - accreditation readiness tracker
///
/// Record evidence against a fixed accreditation checklist and see, per
/// criterion, what is done and what is missing.
#[derive(Parser, Debug)]
#[command(name = "accreditrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the document store (overrides the config file)
    #[arg(short = 'D', long, global = true)]
    pub database: Option<PathBuf>,

    /// Storage backend (overrides the config file)
    #[arg(short = 'B', long, global = true, value_enum)]
    pub backend: Option<Backend>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides the config file)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the checklist catalog
    Criteria,

    /// List document records, newest first
    Documents {
        /// Case-insensitive filter on title or checklist item
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Record a piece of evidence
    Upload {
        /// Document title
        #[arg(short, long)]
        title: String,

        /// Criterion code (e.g. C1)
        #[arg(short = 'C', long)]
        criterion: String,

        /// Checklist item the document satisfies
        #[arg(short, long)]
        item: String,

        /// Academic year (default 2025-2026)
        #[arg(short, long)]
        year: Option<String>,

        /// Original file name (default "Internal Record")
        #[arg(short, long)]
        file_name: Option<String>,

        /// Uploader (default "System")
        #[arg(short, long)]
        uploaded_by: Option<String>,
    },

    /// Delete a document record by id
    Delete {
        /// Document id
        id: String,
    },

    /// Show per-criterion readiness
    Readiness,

    /// Issue a display session for an email and role
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        role: String,
    },

    /// Initialize a new empty store
    Init {
        /// Overwrite an existing store
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Resolve configuration: file first, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<AppConfig, AccreditError> {
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.store.backend = backend;
    }
    if let Some(path) = &cli.database {
        config.store.path = Some(path.clone());
    }
    Ok(config)
}

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AccreditError> {
    let mut config = resolve_config(&cli)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_server(&config).await
        }
        Some(Commands::Criteria) => cmd_criteria(&config, json_mode),
        Some(Commands::Documents { search }) => {
            cmd_documents(&config, json_mode, search.as_deref())
        }
        Some(Commands::Upload {
            title,
            criterion,
            item,
            year,
            file_name,
            uploaded_by,
        }) => {
            let fields = NewDocument {
                year,
                file_name,
                uploaded_by,
                ..NewDocument::new(title, criterion, item)
            };
            cmd_upload(&config, json_mode, fields)
        }
        Some(Commands::Delete { id }) => cmd_delete(&config, json_mode, &id),
        Some(Commands::Login { email, role }) => cmd_login(json_mode, &email, &role),
        Some(Commands::Init { force }) => cmd_init(&config, force),
        Some(Commands::Readiness) | None => cmd_readiness(&config, json_mode),
    }
}
