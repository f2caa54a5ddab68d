use crate::server::error::validation::ValidationError;

/// Unwraps a request field, reporting it by name when absent.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Rejects a `null` or empty `name`.
pub fn require_name(name: Option<String>, max: usize) -> Result<String, ValidationError> {
    match name {
        Some(name) if !name.is_empty() => max_len("name", name, max),
        _ => Err(ValidationError::EmptyName),
    }
}

pub fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(value)
}

/// Rejects text longer than its column, measured in characters.
pub fn max_len(field: &'static str, value: String, max: usize) -> Result<String, ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value)
}

/// [`max_len`] for a nullable field.
pub fn max_len_opt(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    value.map(|value| max_len(field, value, max)).transpose()
}
