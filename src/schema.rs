// 📐 Shape Layer - Presence Validation
// A candidate becomes a Transaction only when all six fields are present

use crate::transaction::{NewTransaction, Transaction};

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn missing(field: &str) -> Self {
        ValidationError {
            field: field.to_string(),
            message: "Required field is missing".to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Transaction] {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Text fields count as missing when empty
fn present_text(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}

/// Check presence of every required field and build the record.
/// `id == 0` and `amount == 0.0` are present values.
pub fn validate(candidate: &NewTransaction) -> ValidationResult<Transaction> {
    let mut errors = Vec::new();

    if candidate.id.is_none() {
        errors.push(ValidationError::missing("id"));
    }
    if candidate.transaction_type.is_none() {
        errors.push(ValidationError::missing("type"));
    }
    if present_text(&candidate.category).is_none() {
        errors.push(ValidationError::missing("category"));
    }
    if candidate.amount.is_none() {
        errors.push(ValidationError::missing("amount"));
    }
    if present_text(&candidate.description).is_none() {
        errors.push(ValidationError::missing("description"));
    }
    if present_text(&candidate.date).is_none() {
        errors.push(ValidationError::missing("date"));
    }

    match (
        candidate.id,
        candidate.transaction_type,
        present_text(&candidate.category),
        candidate.amount,
        present_text(&candidate.description),
        present_text(&candidate.date),
    ) {
        (Some(id), Some(kind), Some(category), Some(amount), Some(description), Some(date)) => {
            Ok(Transaction::new(
                id,
                kind,
                category.clone(),
                amount,
                description.clone(),
                date.clone(),
            ))
        }
        _ => Err(errors),
    }
}

/// Field names from a list of errors, for log lines
pub fn missing_fields(errors: &[ValidationError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}
