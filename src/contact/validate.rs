use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone pattern should compile"));
// word characters are ASCII only, as in browser regexes
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+(-?(?-u:\w)+)*(\.(?-u:\w)+)*\.[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Subject,
        Field::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "username" => Ok(Field::Name),
            "phone" | "phoneNumber" => Ok(Field::Phone),
            "email" => Ok(Field::Email),
            "subject" => Ok(Field::Subject),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Checks a single field value. Empty values are never flagged: an empty
/// field is untouched, not invalid.
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    let len = value.chars().count();
    match field {
        Field::Name if len < 2 => Some("Name must be at least 2 characters."),
        Field::Phone if !PHONE_RE.is_match(value) => Some("Enter a valid phone number."),
        Field::Email if !EMAIL_RE.is_match(value) => Some("Enter a valid email address."),
        Field::Subject if len < 2 => Some("Subject must be at least 2 characters."),
        Field::Message if len < 5 => Some("Message must be at least 5 characters."),
        _ => None,
    }
}

/// Same as [`validate`], addressing the field by its form control name.
pub fn validate_named(name: &str, value: &str) -> Result<Option<&'static str>, UnknownField> {
    let field = name.parse::<Field>()?;
    Ok(validate(field, value))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every field holds something.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Validation messages keyed by field. Always rebuilt from a whole
/// [`FormState`], never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, &'static str>);

impl FormErrors {
    pub fn from_state(state: &FormState) -> Self {
        let errors = Field::ALL
            .iter()
            .filter_map(|f| validate(*f, state.get(*f)).map(|msg| (*f, msg)))
            .collect();
        Self(errors)
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_never_an_error() {
        for field in Field::ALL {
            assert_eq!(validate(field, ""), None, "{field:?} flagged empty input");
        }
    }

    #[test]
    fn test_phone_rule() {
        assert_eq!(validate(Field::Phone, "+989911582801"), None);
        assert_eq!(validate(Field::Phone, "09911582801"), None);
        assert_eq!(validate(Field::Phone, "1234567"), None);
        assert!(validate(Field::Phone, "12345").is_some());
        assert!(validate(Field::Phone, "abc1234567").is_some());
        assert!(validate(Field::Phone, "+1234567890123456").is_some());
        assert!(validate(Field::Phone, "++1234567").is_some());
        assert!(validate(Field::Phone, "123 4567").is_some());
        // non-ASCII digits are not phone digits
        assert!(validate(Field::Phone, "۰۹۱۲۳۴۵۶۷۸").is_some());
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(validate(Field::Email, "alan.shabrandi@gmail.com"), None);
        assert_eq!(validate(Field::Email, "first-last@my-host.co.uk"), None);
        assert_eq!(validate(Field::Email, "a_b@host.io"), None);
        assert_eq!(validate(Field::Email, "me@studio.design"), None);
        assert!(validate(Field::Email, "no-at-sign.com").is_some());
        assert!(validate(Field::Email, "user@host").is_some());
        assert!(validate(Field::Email, "user@host.c").is_some());
        assert!(validate(Field::Email, "user@@host.com").is_some());
        assert!(validate(Field::Email, "user@host.com ").is_some());
        assert!(validate(Field::Email, ".user@host.com").is_some());
        assert!(validate(Field::Email, "user..name@host.com").is_some());
        // the last label must be letters
        assert!(validate(Field::Email, "a@b.12").is_some());
        assert!(validate(Field::Email, "a@b.c0m").is_some());
        assert_eq!(validate(Field::Email, "ops@10.example.org"), None);
    }

    #[test]
    fn test_length_rules() {
        assert!(validate(Field::Name, "A").is_some());
        assert_eq!(validate(Field::Name, "Al"), None);
        assert!(validate(Field::Subject, "x").is_some());
        assert_eq!(validate(Field::Subject, "Hi"), None);
        assert!(validate(Field::Message, "Hey!").is_some());
        assert_eq!(validate(Field::Message, "Hello"), None);
        // counted in characters, not bytes
        assert!(validate(Field::Name, "é").is_some());
        assert_eq!(validate(Field::Message, "سلام!"), None);
    }

    #[test]
    fn test_validate_named() {
        assert_eq!(validate_named("phoneNumber", "12345"), Ok(Some("Enter a valid phone number.")));
        assert_eq!(validate_named("username", "Alan"), Ok(None));
        assert_eq!(validate_named("message", ""), Ok(None));
        assert_eq!(
            validate_named("fax", "123"),
            Err(UnknownField("fax".to_string()))
        );
    }

    #[test]
    fn test_errors_rebuilt_from_whole_state() {
        let mut state = FormState::default();
        assert!(FormErrors::from_state(&state).is_empty());

        state.set(Field::Name, "A");
        state.set(Field::Phone, "123");
        let errors = FormErrors::from_state(&state);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters."));
        assert_eq!(errors.get(Field::Email), None);

        state.set(Field::Name, "Alan");
        let errors = FormErrors::from_state(&state);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Name).is_none());
        assert!(errors.get(Field::Phone).is_some());
    }

    #[test]
    fn test_form_state_completeness() {
        let mut state = FormState::default();
        assert!(!state.is_complete());
        for field in Field::ALL {
            state.set(field, "value");
        }
        assert!(state.is_complete());
        state.set(Field::Subject, "");
        assert!(!state.is_complete());
        state.clear();
        assert_eq!(state, FormState::default());
    }
}
