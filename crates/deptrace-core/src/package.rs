use crate::error::ValidationError;

pub fn validate_package_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyPackage);
    }
    Ok(trimmed.to_string())
}

/// Test-graph identifiers are restricted to `[A-Z]+`.
pub fn is_fixture_package_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch.is_ascii_uppercase())
}
