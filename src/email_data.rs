/// Data structures for generated addresses
use serde::{Deserialize, Serialize};

use crate::address::{plus_address, validate};
use crate::error::ValidationError;

/// One generated plus-address. Never modified after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedEmail {
    pub id: String,
    pub full_email: String,
    pub username: String,
    pub domain: String,
    pub counter: u32,
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
}

impl GeneratedEmail {
    /// Validate the fields and build the entry for `counter`
    ///
    /// The id and timestamp come from the caller so this stays pure.
    pub fn generate(
        username: &str,
        counter: u32,
        domain: &str,
        id: String,
        timestamp: f64,
    ) -> Result<GeneratedEmail, ValidationError> {
        let (username, domain) = validate(username, domain)?;

        Ok(GeneratedEmail {
            id,
            full_email: plus_address(username, counter, domain),
            username: username.to_string(),
            domain: domain.to_string(),
            counter,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_entry() {
        let entry = GeneratedEmail::generate(
            " ahmed ",
            7,
            "gmail.com ",
            "id-1".to_string(),
            1698508200000.0,
        )
        .unwrap();

        assert_eq!(entry.id, "id-1");
        assert_eq!(entry.full_email, "ahmed+7@gmail.com");
        assert_eq!(entry.username, "ahmed");
        assert_eq!(entry.domain, "gmail.com");
        assert_eq!(entry.counter, 7);
        assert_eq!(entry.timestamp, 1698508200000.0);
    }

    #[test]
    fn test_full_email_matches_fields() {
        let cases = [("a", 1, "b.c"), ("  john.doe ", 19, " proton.me"), ("x+y", 2, "z.io")];

        for (username, counter, domain) in cases {
            let entry = GeneratedEmail::generate(username, counter, domain, "id".to_string(), 0.0).unwrap();
            let expected = format!("{}+{}@{}", username.trim(), counter, domain.trim());
            assert_eq!(entry.full_email, expected);
        }
    }

    #[test]
    fn test_generate_rejects_missing_fields() {
        assert_eq!(
            GeneratedEmail::generate("", 1, "gmail.com", "id".to_string(), 0.0),
            Err(ValidationError::MissingUsername)
        );
        assert_eq!(
            GeneratedEmail::generate("ahmed", 1, "  ", "id".to_string(), 0.0),
            Err(ValidationError::MissingDomain)
        );
    }

    #[test]
    fn test_serialization() {
        let entry = GeneratedEmail::generate("ahmed", 1, "gmail.com", "test-123".to_string(), 1698508200000.0).unwrap();

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: GeneratedEmail = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, entry);
    }
}
