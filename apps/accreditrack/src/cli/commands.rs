//! # CLI Command Implementations

use crate::api;
use crate::config::AppConfig;
use accreditrack_core::{
    AccreditError, DocumentId, DocumentRecord, NewDocument, ReadinessReport, issue_session,
};

/// Width of the text progress bar, in cells.
const BAR_WIDTH: usize = 20;

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AccreditError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AccreditError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: &AppConfig) -> Result<(), AccreditError> {
    let checklist = config.checklist()?;
    let registry = config.open_registry()?;

    println!("AccrediTrack Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:      {}", config.server.host);
    println!("  Port:      {}", config.server.port);
    println!("  Backend:   {}", config.store.backend);
    if let Some(path) = config.store.resolved_path() {
        println!("  Store:     {}", path.display());
    }
    println!("  Criteria:  {}", checklist.list_criteria().len());
    println!("  Strict:    {}", config.strict_references);
    println!();
    println!("Endpoints:");
    println!("  POST   /api/auth/login     - Issue a session");
    println!("  GET    /api/criteria       - Checklist catalog");
    println!("  GET    /api/documents      - List documents (?search=)");
    println!("  POST   /api/documents      - Upload a document record");
    println!("  DELETE /api/documents/{{id}} - Delete a document record");
    println!("  GET    /api/readiness      - Readiness report");
    println!("  GET    /health             - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    api::run_server(&addr, registry, checklist).await
}

// =============================================================================
// CRITERIA COMMAND
// =============================================================================

/// List the checklist catalog.
pub fn cmd_criteria(config: &AppConfig, json_mode: bool) -> Result<(), AccreditError> {
    let checklist = config.checklist()?;

    if json_mode {
        return print_json(&checklist.list_criteria());
    }

    println!("Checklist Criteria");
    println!("==================");
    for criterion in checklist.list_criteria() {
        println!();
        println!("[{}] {}", criterion.code, criterion.name);
        for item in &criterion.required_items {
            println!("  - {}", item);
        }
    }
    println!();
    println!(
        "{} criteria, {} required items",
        checklist.list_criteria().len(),
        checklist.required_item_count()
    );

    Ok(())
}

// =============================================================================
// DOCUMENT COMMANDS
// =============================================================================

/// List or search document records.
pub fn cmd_documents(
    config: &AppConfig,
    json_mode: bool,
    search: Option<&str>,
) -> Result<(), AccreditError> {
    let registry = config.open_registry()?;
    let records = match search {
        Some(term) if !term.is_empty() => registry.search(term)?,
        _ => registry.list_all()?,
    };

    if json_mode {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("No documents found.");
        return Ok(());
    }

    for record in &records {
        print!("{}", render_document(record));
    }
    println!("{} document(s)", records.len());
    Ok(())
}

/// Create a document record.
pub fn cmd_upload(
    config: &AppConfig,
    json_mode: bool,
    fields: NewDocument,
) -> Result<(), AccreditError> {
    let mut registry = config.open_registry()?;
    let record = registry.create(fields)?;
    tracing::info!(id = %record.id, criterion = %record.criterion_code, "Document uploaded");

    if json_mode {
        return print_json(&api::UploadResponse::uploaded(record));
    }

    println!("Document uploaded");
    print!("{}", render_document(&record));
    Ok(())
}

/// Delete a document record by id.
pub fn cmd_delete(config: &AppConfig, json_mode: bool, id: &str) -> Result<(), AccreditError> {
    let mut registry = config.open_registry()?;
    registry.delete_by_id(&DocumentId::new(id))?;
    tracing::info!(id = %id, "Document deleted");

    if json_mode {
        return print_json(&api::MessageResponse::new("Document deleted successfully"));
    }

    println!("Document deleted successfully");
    Ok(())
}

fn render_document(record: &DocumentRecord) -> String {
    format!(
        "{}  {}\n    {} / {}\n    {} | {} | {} | {}\n\n",
        record.id,
        record.title,
        record.criterion_code,
        record.checklist_title,
        record.year,
        record.file_name,
        record.uploaded_by,
        record.created_at.to_rfc3339(),
    )
}

// =============================================================================
// READINESS COMMAND
// =============================================================================

/// Show the readiness dashboard.
pub fn cmd_readiness(config: &AppConfig, json_mode: bool) -> Result<(), AccreditError> {
    let checklist = config.checklist()?;
    let registry = config.open_registry()?;
    let report = registry.readiness(&checklist)?;

    if json_mode {
        return print_json(&api::ReadinessResponse::from(report));
    }

    print!("{}", render_dashboard(&report));
    Ok(())
}

/// `[#####---------------]` for a 0..=100 percent.
pub fn progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

/// Text dashboard: overview metrics followed by one card per criterion.
pub fn render_dashboard(report: &ReadinessReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str("Accreditation Readiness\n");
    out.push_str("=======================\n\n");
    out.push_str(&format!(
        "  Total Documents:     {}\n",
        summary.total_documents
    ));
    out.push_str(&format!(
        "  Items Completed:     {} / {}\n",
        summary.total_completed_items, summary.total_required_items
    ));
    out.push_str(&format!(
        "  Overall Readiness:   {}% {}\n",
        summary.overall_readiness_percent,
        progress_bar(summary.overall_readiness_percent)
    ));

    for criterion in &report.criteria {
        out.push('\n');
        out.push_str(&format!(
            "[{}] {}  ({}, {})\n",
            criterion.code,
            criterion.name,
            criterion.status,
            criterion.status.tone()
        ));
        out.push_str(&format!(
            "  Readiness Score: {}% {}\n",
            criterion.readiness_percent,
            progress_bar(criterion.readiness_percent)
        ));

        if criterion.is_complete() {
            out.push_str("  Requirements fulfilled\n");
        } else {
            out.push_str("  Gap Tracker:\n");
            for item in &criterion.missing_items {
                out.push_str(&format!("    x {}\n", item));
            }
        }
    }

    out
}

// =============================================================================
// LOGIN COMMAND
// =============================================================================

/// Issue and print a display session.
pub fn cmd_login(json_mode: bool, email: &str, role: &str) -> Result<(), AccreditError> {
    let user = issue_session(Some(email), Some(role))?;

    if json_mode {
        return print_json(&api::LoginResponse::success(user));
    }

    println!("Login successful");
    println!("  Name:  {}", user.name);
    println!("  Email: {}", user.email);
    println!("  Role:  {}", user.role);
    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Create an empty store at the configured path.
pub fn cmd_init(config: &AppConfig, force: bool) -> Result<(), AccreditError> {
    let Some(path) = config.store.resolved_path() else {
        println!("Memory backend needs no initialization.");
        return Ok(());
    };

    if path.exists() {
        if !force {
            return Err(AccreditError::IoError(format!(
                "Store already exists at '{}'. Use --force to overwrite.",
                path.display()
            )));
        }
        std::fs::remove_file(&path).map_err(|e| {
            AccreditError::IoError(format!("Cannot remove '{}': {}", path.display(), e))
        })?;
        tracing::warn!(path = %path.display(), "Existing store removed");
    }

    let registry = config.open_registry()?;
    println!(
        "Initialized new {} store at {}",
        registry.backend_name(),
        path.display()
    );
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Backend, StoreConfig};
    use accreditrack_core::{Checklist, DocumentRegistry};
    use tempfile::TempDir;

    fn json_config(temp: &TempDir) -> AppConfig {
        AppConfig {
            store: StoreConfig {
                backend: Backend::Json,
                path: Some(temp.path().join("documents.json")),
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(50).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn dashboard_shows_gaps_and_fulfilled() {
        let mut registry = DocumentRegistry::in_memory();
        registry
            .create(NewDocument::new("Photos", "C4", "Lab facilities photos"))
            .expect("create");
        let report = registry.readiness(&Checklist::naac()).expect("readiness");

        let text = render_dashboard(&report);
        assert!(text.contains("Total Documents:     1"));
        assert!(text.contains("Items Completed:     1 / 10"));
        assert!(text.contains("Overall Readiness:   10%"));
        assert!(text.contains("[C4] Infrastructure and Learning Resources  (On Track, green)"));
        assert!(text.contains("Requirements fulfilled"));
        assert!(text.contains("Gap Tracker:"));
        assert!(text.contains("x Value-added courses proof"));
    }

    #[test]
    fn upload_then_delete_through_json_store() {
        let temp = TempDir::new().expect("temp dir");
        let config = json_config(&temp);

        cmd_upload(
            &config,
            true,
            NewDocument::new("Minutes", "C6", "IQAC minutes & policies"),
        )
        .expect("upload");

        let registry = config.open_registry().expect("open");
        let records = registry.list_all().expect("list");
        assert_eq!(records.len(), 1);

        cmd_delete(&config, true, records[0].id.as_str()).expect("delete");
        assert!(config.open_registry().expect("open").is_empty().expect("empty"));
    }

    #[test]
    fn delete_unknown_is_not_found() {
        let temp = TempDir::new().expect("temp dir");
        let config = json_config(&temp);
        let err = cmd_delete(&config, true, "123").expect_err("missing");
        assert!(matches!(err, AccreditError::DocumentNotFound(_)));
    }

    #[test]
    fn init_refuses_existing_store_without_force() {
        let temp = TempDir::new().expect("temp dir");
        let config = json_config(&temp);

        cmd_init(&config, false).expect("first init");
        assert!(cmd_init(&config, false).is_err());
        cmd_init(&config, true).expect("forced init");
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(cmd_login(true, "", "Coordinator").is_err());
        assert!(cmd_login(true, "a@b.edu", "Coordinator").is_ok());
    }
}
