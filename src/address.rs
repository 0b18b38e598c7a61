/// Address parsing, validation and plus-address construction
use crate::error::ValidationError;

/// Separator between the local part and the domain
pub const SEPARATOR: char = '@';

/// Result of splitting the combined username field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub username: String,
    /// `None` means the previously entered domain should be kept
    pub domain: Option<String>,
}

/// Split a raw combined-field value into username and domain
///
/// Algorithm:
/// 1. No `@` → the whole string is the username, domain untouched
/// 2. Otherwise split on `@`
/// 3. The first segment always becomes the username
/// 4. The second segment becomes the domain only when non-empty, so a
///    half-typed "user@" keeps whatever domain was entered before
///
/// Anything after a second `@` is ignored. Nothing here is an error.
///
/// Examples:
/// - "ahmed" → ("ahmed", None)
/// - "ahmed@gmail.com" → ("ahmed", Some("gmail.com"))
/// - "ahmed@" → ("ahmed", None)
pub fn parse_combined_input(raw: &str) -> ParsedInput {
    let mut parts = raw.split(SEPARATOR);
    let username = parts.next().unwrap_or_default().to_string();

    let domain = parts
        .next()
        .filter(|domain| !domain.is_empty())
        .map(str::to_string);

    ParsedInput { username, domain }
}

/// Check both fields and return their trimmed forms
pub fn validate<'a>(username: &'a str, domain: &'a str) -> Result<(&'a str, &'a str), ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::MissingUsername);
    }

    let domain = domain.trim();
    if domain.is_empty() {
        return Err(ValidationError::MissingDomain);
    }

    Ok((username, domain))
}

/// Build `username+counter@domain` from already validated parts
///
/// A `+` already present in the username is kept as-is; the counter
/// suffix is always appended.
pub fn plus_address(username: &str, counter: u32, domain: &str) -> String {
    format!("{}+{}{}{}", username.trim(), counter, SEPARATOR, domain.trim())
}
