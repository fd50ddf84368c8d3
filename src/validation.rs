/*!
Field level validation errors shown next to form inputs.
*/
use serde::Serialize;
use std::fmt;

/// A single problem with a form field. `label` is a copy key resolved by the
/// template layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldError {
    /// A required value was left blank.
    Enter { label: String },
    /// A choice from a list was not made.
    Select { label: String },
    /// Input longer than `length` characters.
    StringTooLong { label: String, length: usize },
    /// Copy that does not fit the other kinds.
    Custom { label: String },
}

impl FieldError {
    pub fn label(&self) -> &str {
        match self {
            FieldError::Enter { label }
            | FieldError::Select { label }
            | FieldError::StringTooLong { label, .. }
            | FieldError::Custom { label } => label,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldError::Enter { label } => write!(f, "enter {}", label),
            FieldError::Select { label } => write!(f, "select {}", label),
            FieldError::StringTooLong { label, length } => {
                write!(f, "{} must be {} characters or less", label, length)
            }
            FieldError::Custom { label } => f.write_str(label),
        }
    }
}

/// A field name paired with its error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorEntry {
    pub name: String,
    pub error: FieldError,
}

/// Ordered list of field errors. Order follows the form so the error summary
/// reads top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldErrorEntry>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding one error.
    pub fn with(name: &str, error: FieldError) -> Self {
        Self::new().and(name, error)
    }

    /// Builder form of [`ValidationErrors::add`].
    pub fn and(mut self, name: &str, error: FieldError) -> Self {
        self.add(name, error);
        self
    }

    /// Adds an error unless the field already has one.
    pub fn add(&mut self, name: &str, error: FieldError) {
        if self.get(name).is_none() {
            self.0.push(FieldErrorEntry {
                name: name.to_string(),
                error,
            });
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.0
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.error)
    }

    pub fn none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn any(&self) -> bool {
        !self.none()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldErrorEntry> {
        self.0.iter()
    }

    /// Runs `checks` against `value` in order and records the first failure.
    pub fn string(&mut self, name: &str, label: &str, value: &str, checks: &[StringCheck]) {
        if let Some(error) = checks.iter().find_map(|check| check.check(label, value)) {
            self.add(name, error);
        }
    }
}

/// Checks applied to free text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringCheck {
    /// Value must not be blank.
    Empty,
    /// Value must be at most this many characters.
    TooLong(usize),
}

impl StringCheck {
    pub fn check(&self, label: &str, value: &str) -> Option<FieldError> {
        match *self {
            StringCheck::Empty => {
                if validator::validate_length(value, Some(1), None, None) {
                    None
                } else {
                    Some(FieldError::Enter {
                        label: label.to_string(),
                    })
                }
            }
            StringCheck::TooLong(length) => {
                if validator::validate_length(value, None, Some(length as u64), None) {
                    None
                } else {
                    Some(FieldError::StringTooLong {
                        label: label.to_string(),
                        length,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failing_check_wins() {
        let mut errors = ValidationErrors::new();
        errors.string(
            "name",
            "yourName",
            "",
            &[StringCheck::Empty, StringCheck::TooLong(0)],
        );
        assert_eq!(
            ValidationErrors::with(
                "name",
                FieldError::Enter {
                    label: "yourName".into()
                }
            ),
            errors
        );
    }

    #[test]
    fn too_long() {
        assert_eq!(None, StringCheck::TooLong(3).check("x", "abc"));
        assert_eq!(
            Some(FieldError::StringTooLong {
                label: "x".into(),
                length: 3
            }),
            StringCheck::TooLong(3).check("x", "abcd")
        );
    }

    #[test]
    fn one_error_per_field() {
        let errors = ValidationErrors::with(
            "a",
            FieldError::Custom {
                label: "first".into(),
            },
        )
        .and(
            "a",
            FieldError::Custom {
                label: "second".into(),
            },
        );
        assert_eq!(1, errors.len());
        assert_eq!("first", errors.get("a").map(FieldError::label).unwrap());
    }
}
