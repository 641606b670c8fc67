//! Participant domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A person who can be linked to calendars and recurring slots.
///
/// Names are unique and matched case-sensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Rejects blank names and otherwise keeps the name exactly as given.
///
/// Matching is exact: "Kim", "kim" and " Kim" are three different participants.
pub fn validate_participant_name(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingField("participantName".to_string()).into());
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keeps_name_verbatim() {
        assert_eq!(validate_participant_name(" Minji ").unwrap(), " Minji ");
        assert_ne!(
            validate_participant_name(" Kim").unwrap(),
            validate_participant_name("Kim").unwrap()
        );
    }

    #[test]
    fn test_validate_preserves_case() {
        assert_eq!(validate_participant_name("KIM").unwrap(), "KIM");
        assert_ne!(
            validate_participant_name("Kim").unwrap(),
            validate_participant_name("kim").unwrap()
        );
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert!(validate_participant_name("   ").is_err());
        assert!(validate_participant_name("").is_err());
    }
}
