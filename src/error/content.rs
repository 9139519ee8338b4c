//! Content authoring errors.
//!
//! These are never raised while rendering. They describe static content that
//! breaks one of the content model's identity or presence rules and are
//! reported by [`crate::content::validate::validate`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A field that must carry text is empty or whitespace.
    #[error("{entity}.{field} must not be empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("social link label {label:?} appears more than once")]
    DuplicateSocialLabel { label: String },

    #[error("skill group {group:?} appears more than once")]
    DuplicateSkillGroup { group: String },

    #[error("project {name:?} appears more than once")]
    DuplicateProject { name: String },

    #[error("experience entry {role:?} at {company:?} appears more than once")]
    DuplicateExperience { company: String, role: String },

    #[error("education entry {degree:?} at {school:?} appears more than once")]
    DuplicateEducation { school: String, degree: String },
}

impl ContentError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::EmptyField { .. } => "E_CONTENT_EMPTY",
            ContentError::DuplicateSocialLabel { .. } => "E_CONTENT_DUP_SOCIAL",
            ContentError::DuplicateSkillGroup { .. } => "E_CONTENT_DUP_SKILL",
            ContentError::DuplicateProject { .. } => "E_CONTENT_DUP_PROJECT",
            ContentError::DuplicateExperience { .. } => "E_CONTENT_DUP_EXPERIENCE",
            ContentError::DuplicateEducation { .. } => "E_CONTENT_DUP_EDUCATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_key() {
        let err = ContentError::DuplicateExperience {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "experience entry \"Engineer\" at \"Acme\" appears more than once"
        );
    }

    #[test]
    fn test_empty_field_display() {
        let err = ContentError::EmptyField {
            entity: "profile",
            field: "name",
        };
        assert_eq!(err.to_string(), "profile.name must not be empty");
        assert_eq!(err.error_code(), "E_CONTENT_EMPTY");
    }
}
