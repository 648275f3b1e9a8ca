//! # Checklist Registry
//!
//! The fixed catalog of accreditation criteria and their required evidence.
//!
//! The catalog is loaded once at process start and never mutated. By default
//! it is the seven-criterion NAAC checklist; the app layer may replace it with
//! a configured catalog, which is validated here.

use crate::primitives::{MAX_CRITERIA, MAX_ITEMS_PER_CRITERION};
use crate::{AccreditError, Criterion};
use std::collections::BTreeSet;

/// The built-in NAAC catalog: (code, name, required items).
const NAAC_CRITERIA: &[(&str, &str, &[&str])] = &[
    (
        "C1",
        "Curricular Aspects",
        &["Curriculum plan & syllabus", "Value-added courses proof"],
    ),
    (
        "C2",
        "Teaching-Learning and Evaluation",
        &["Faculty profiles", "Attendance & internal marks"],
    ),
    (
        "C3",
        "Research, Innovations and Extension",
        &["Publications list", "Workshops/seminars evidence"],
    ),
    (
        "C4",
        "Infrastructure and Learning Resources",
        &["Lab facilities photos"],
    ),
    (
        "C5",
        "Student Support and Progression",
        &["Placement proof & summary"],
    ),
    (
        "C6",
        "Governance, Leadership and Management",
        &["IQAC minutes & policies"],
    ),
    (
        "C7",
        "Institutional Values and Best Practices",
        &["Best practices proof"],
    ),
];

/// An ordered, read-only catalog of criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    criteria: Vec<Criterion>,
}

impl Checklist {
    /// Build a checklist from configured criteria.
    ///
    /// Rejects empty or duplicate codes and catalogs beyond the size limits.
    /// Criteria with no required items are accepted; they always score 0%.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, AccreditError> {
        if criteria.len() > MAX_CRITERIA {
            return Err(AccreditError::ConfigError(format!(
                "Checklist has {} criteria, maximum is {}",
                criteria.len(),
                MAX_CRITERIA
            )));
        }

        let mut seen = BTreeSet::new();
        for criterion in &criteria {
            if criterion.code.trim().is_empty() {
                return Err(AccreditError::ConfigError(
                    "Criterion code must not be empty".to_string(),
                ));
            }
            if !seen.insert(criterion.code.as_str()) {
                return Err(AccreditError::ConfigError(format!(
                    "Duplicate criterion code: {}",
                    criterion.code
                )));
            }
            if criterion.required_items.len() > MAX_ITEMS_PER_CRITERION {
                return Err(AccreditError::ConfigError(format!(
                    "Criterion {} has {} items, maximum is {}",
                    criterion.code,
                    criterion.required_items.len(),
                    MAX_ITEMS_PER_CRITERION
                )));
            }
        }

        Ok(Self { criteria })
    }

    /// The built-in NAAC checklist.
    #[must_use]
    pub fn naac() -> Self {
        let criteria = NAAC_CRITERIA
            .iter()
            .map(|(code, name, items)| Criterion::new(*code, *name, items.iter().copied()))
            .collect();
        Self { criteria }
    }

    /// All criteria in catalog order.
    #[must_use]
    pub fn list_criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Look up a criterion by code.
    #[must_use]
    pub fn criterion(&self, code: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.code == code)
    }

    /// Total number of required items across all criteria.
    #[must_use]
    pub fn required_item_count(&self) -> usize {
        self.criteria.iter().map(|c| c.required_items.len()).sum()
    }

    /// Check that `code` names a criterion and `item` one of its items.
    pub fn check_reference(&self, code: &str, item: &str) -> Result<(), AccreditError> {
        let criterion = self.criterion(code).ok_or_else(|| {
            AccreditError::ValidationError(format!("Unknown criterion code: {}", code))
        })?;

        if !criterion.requires(item) {
            return Err(AccreditError::ValidationError(format!(
                "'{}' is not a checklist item of {}",
                item, code
            )));
        }
        Ok(())
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::naac()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naac_catalog_shape() {
        let checklist = Checklist::naac();
        let codes: Vec<_> = checklist
            .list_criteria()
            .iter()
            .map(|c| c.code.as_str())
            .collect();

        assert_eq!(codes, vec!["C1", "C2", "C3", "C4", "C5", "C6", "C7"]);
        assert_eq!(checklist.required_item_count(), 10);
    }

    #[test]
    fn naac_item_order_preserved() {
        let checklist = Checklist::naac();
        let c1 = checklist.criterion("C1").expect("C1 present");

        assert_eq!(c1.name, "Curricular Aspects");
        assert_eq!(
            c1.required_items,
            vec!["Curriculum plan & syllabus", "Value-added courses proof"]
        );
    }

    #[test]
    fn duplicate_codes_rejected() {
        let result = Checklist::new(vec![
            Criterion::new("C1", "A", ["x"]),
            Criterion::new("C1", "B", ["y"]),
        ]);
        assert!(matches!(result, Err(AccreditError::ConfigError(_))));
    }

    #[test]
    fn empty_code_rejected() {
        let result = Checklist::new(vec![Criterion::new("  ", "Blank", ["x"])]);
        assert!(matches!(result, Err(AccreditError::ConfigError(_))));
    }

    #[test]
    fn criterion_without_items_accepted() {
        let checklist =
            Checklist::new(vec![Criterion::new("C9", "Empty", Vec::<String>::new())])
                .expect("valid");
        assert_eq!(checklist.required_item_count(), 0);
    }

    #[test]
    fn check_reference_known_and_unknown() {
        let checklist = Checklist::naac();

        assert!(checklist.check_reference("C4", "Lab facilities photos").is_ok());
        assert!(matches!(
            checklist.check_reference("C9", "Lab facilities photos"),
            Err(AccreditError::ValidationError(_))
        ));
        assert!(matches!(
            checklist.check_reference("C4", "Publications list"),
            Err(AccreditError::ValidationError(_))
        ));
    }
}
