//! Author validation constants and functions.

/// Maximum length of a first or last name in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a biography in characters.
pub const MAX_BIO_LENGTH: usize = 5_000;

/// Validate an author first name.
pub fn validate_first_name(first_name: &str) -> Result<(), String> {
    validate_name("firstName", first_name)
}

/// Validate an author last name.
pub fn validate_last_name(last_name: &str) -> Result<(), String> {
    validate_name("lastName", last_name)
}

fn validate_name(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an author biography.
pub fn validate_bio(bio: &str) -> Result<(), String> {
    if bio.chars().count() > MAX_BIO_LENGTH {
        return Err(format!(
            "bio exceeds maximum length of {MAX_BIO_LENGTH} characters"
        ));
    }
    Ok(())
}
