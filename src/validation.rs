//! Input validation for takt planning projects.
//!
//! Checks structural integrity of a project before optimization.
//!
//! Rejected by [`validate_project`]:
//! - Blank or duplicate work-item ids (crew ids must be unique)
//!
//! Reported by [`project_warnings`] but still planned:
//! - Blank floor names and duplicate floor names (zone ids repeat)
//! - Blank work-item names (the crew is priced at the default rate)
//!
//! Projects with no floors or no work items are valid; the optimizer
//! degrades to empty zone or crew lists.

use crate::models::Project;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two floors share a name, or two work items share an id.
    DuplicateId,
    /// A floor or work item has a blank name (warning only).
    EmptyName,
    /// A work item has a blank id.
    EmptyId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a project.
///
/// Checks that every work item has a non-blank id and that no two work
/// items share one.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_project(project: &Project) -> ValidationResult {
    let mut errors = Vec::new();

    let mut item_ids = HashSet::new();
    for (idx, item) in project.work_items.iter().enumerate() {
        if item.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Work item #{idx} has no id"),
            ));
        } else if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate work item ID: {}", item.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Lists issues that do not block planning.
///
/// Blank floor names, duplicate floor names and blank work-item names are
/// all plannable; callers typically log them.
pub fn project_warnings(project: &Project) -> Vec<ValidationError> {
    let mut warnings = Vec::new();

    let mut floor_names = HashSet::new();
    for (idx, floor) in project.floors.iter().enumerate() {
        if floor.name.trim().is_empty() {
            warnings.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Floor #{idx} (number {}) has no name", floor.number),
            ));
        } else if !floor_names.insert(floor.name.as_str()) {
            warnings.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate floor name: {}", floor.name),
            ));
        }
    }

    for item in &project.work_items {
        if item.name.trim().is_empty() {
            warnings.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Work item '{}' has no name", item.id),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkItem;

    fn sample_project() -> Project {
        Project::new()
            .with_floor("Zemin", 0)
            .with_floor("Kat 1", 1)
            .with_work_item("w1", "Siva")
            .with_work_item("w2", "Boya")
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_project(&sample_project()).is_ok());
        assert!(project_warnings(&sample_project()).is_empty());
    }

    #[test]
    fn test_empty_project_is_valid() {
        assert!(validate_project(&Project::new()).is_ok());
    }

    #[test]
    fn test_duplicate_floor_name_is_a_warning() {
        let p = sample_project().with_floor("Kat 1", 2);
        assert!(validate_project(&p).is_ok());
        let warnings = project_warnings(&p);
        assert!(warnings
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("floor")));
    }

    #[test]
    fn test_duplicate_work_item_id() {
        let p = sample_project().with_work_item("w1", "Seramik");
        let errors = validate_project(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("w1")));
    }

    #[test]
    fn test_blank_names_are_warnings() {
        let p = Project::new().with_floor("  ", 0).with_work_item("w1", "");
        assert!(validate_project(&p).is_ok());
        let warnings = project_warnings(&p);
        assert_eq!(
            warnings
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyName)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors() {
        let mut p = sample_project().with_work_item("w2", "Seramik");
        p.work_items.push(WorkItem::new("", "Sap"));

        let errors = validate_project(&p).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }
}
