//! Product option input validation

use super::product::MAX_NAME_LEN;
use super::ValidationError;

/// Validated option fields for create/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDraft {
    pub name: String,
    pub description: Option<String>,
}

impl OptionDraft {
    /// Build a draft, validating the name (non-empty, at most 128 characters).
    pub fn new(name: &str, description: Option<String>) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if name.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft() {
        let draft = OptionDraft::new("Small", Some("Size small".into())).unwrap();
        assert_eq!(draft.name, "Small");
        assert_eq!(draft.description.as_deref(), Some("Size small"));
    }

    #[test]
    fn rejects_empty_name() {
        let err = OptionDraft::new("", None).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn description_is_optional() {
        assert!(OptionDraft::new("Small", None).is_ok());
    }
}
