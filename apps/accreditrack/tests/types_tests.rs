//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use accreditrack::api::{
    CriterionReadiness, ErrorResponse, HealthResponse, LoginRequest, MessageResponse,
    ReadinessResponse, SearchQuery,
};
use accreditrack_core::{Checklist, DocumentRegistry, NewDocument, compute_readiness};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_serialization() {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: "0.3.1".to_string(),
    };

    let json = serde_json::to_string(&health).unwrap();
    assert_eq!(json, r#"{"status":"ok","version":"0.3.1"}"#);
}

// =============================================================================
// GENERIC BODY TESTS
// =============================================================================

#[test]
fn test_error_response_shape() {
    let json = serde_json::to_string(&ErrorResponse::new("Document not found")).unwrap();
    assert_eq!(json, r#"{"error":"Document not found"}"#);
}

#[test]
fn test_message_response_shape() {
    let json =
        serde_json::to_string(&MessageResponse::new("Document deleted successfully")).unwrap();
    assert_eq!(json, r#"{"message":"Document deleted successfully"}"#);
}

// =============================================================================
// REQUEST TESTS
// =============================================================================

#[test]
fn test_login_request_fields_optional() {
    let request: LoginRequest = serde_json::from_str("{}").unwrap();
    assert!(request.email.is_none());
    assert!(request.role.is_none());

    let request: LoginRequest =
        serde_json::from_str(r#"{"email":"a@b.edu","role":"IQAC"}"#).unwrap();
    assert_eq!(request.email.as_deref(), Some("a@b.edu"));
    assert_eq!(request.role.as_deref(), Some("IQAC"));
}

#[test]
fn test_search_query_optional() {
    let query: SearchQuery = serde_json::from_str("{}").unwrap();
    assert!(query.search.is_none());
}

#[test]
fn test_new_document_camel_case() {
    let fields: NewDocument = serde_json::from_str(
        r#"{"title":"T","criterionCode":"C1","checklistTitle":"Item","uploadedBy":"Ann"}"#,
    )
    .unwrap();
    assert_eq!(fields.criterion_code.as_deref(), Some("C1"));
    assert_eq!(fields.checklist_title.as_deref(), Some("Item"));
    assert_eq!(fields.uploaded_by.as_deref(), Some("Ann"));
    assert!(fields.year.is_none());
}

// =============================================================================
// READINESS RESPONSE TESTS
// =============================================================================

#[test]
fn test_readiness_response_from_report() {
    let mut registry = DocumentRegistry::in_memory();
    registry
        .create(NewDocument::new("Proof", "C7", "Best practices proof"))
        .unwrap();
    let documents = registry.list_all().unwrap();
    let report = compute_readiness(Checklist::naac().list_criteria(), &documents);

    let response = ReadinessResponse::from(report);
    let c7: &CriterionReadiness = response.criteria.iter().find(|c| c.code == "C7").unwrap();
    assert_eq!(c7.status, "On Track");
    assert_eq!(c7.tone, "green");
    assert!(c7.is_complete);
    assert_eq!(c7.required_count, 1);
}

#[test]
fn test_readiness_response_field_names() {
    let report = compute_readiness(Checklist::naac().list_criteria(), &[]);
    let value = serde_json::to_value(ReadinessResponse::from(report)).unwrap();

    let first = &value["criteria"][0];
    for key in [
        "code",
        "name",
        "completedItems",
        "missingItems",
        "readinessPercent",
        "status",
        "tone",
        "isComplete",
    ] {
        assert!(first.get(key).is_some(), "missing key {}", key);
    }

    let summary = &value["summary"];
    assert_eq!(summary["totalDocuments"], 0);
    assert_eq!(summary["totalRequiredItems"], 10);
    assert_eq!(summary["totalCompletedItems"], 0);
    assert_eq!(summary["overallReadinessPercent"], 0);
}
