use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five field identities the form recognizes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Email,
    Subject,
    Message,
    Urgency,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Subject,
        FieldKey::Message,
        FieldKey::Urgency,
    ];

    /// Fields that must be non-empty before a submit is accepted, in display order.
    pub const REQUIRED: [FieldKey; 4] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Subject,
        FieldKey::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Subject => "subject",
            FieldKey::Message => "message",
            FieldKey::Urgency => "urgency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Full name",
            FieldKey::Email => "Email address",
            FieldKey::Subject => "Subject",
            FieldKey::Message => "Message",
            FieldKey::Urgency => "Urgency",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FieldKey::Urgency)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FormError::InvalidField(s.to_string()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Urgency {
    pub fn all() -> &'static [Urgency] {
        &[Urgency::Low, Urgency::Normal, Urgency::High, Urgency::Urgent]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Urgency::Low => "Low - General question",
            Urgency::Normal => "Normal - Need help soon",
            Urgency::High => "High - Affecting my account",
            Urgency::Urgent => "Urgent - Critical issue",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::all()
            .iter()
            .copied()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| FormError::InvalidValue {
                field: FieldKey::Urgency,
                value: s.to_string(),
            })
    }
}

/// Values of the support request as currently entered.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub urgency: Urgency,
}

impl FormFields {
    /// Returns a copy with `field` replaced by `value`; every other field is carried over.
    pub fn with_field(&self, field: FieldKey, value: &str) -> Result<FormFields, FormError> {
        let mut next = self.clone();
        match field {
            FieldKey::Name => next.name = value.to_string(),
            FieldKey::Email => next.email = value.to_string(),
            FieldKey::Subject => next.subject = value.to_string(),
            FieldKey::Message => next.message = value.to_string(),
            FieldKey::Urgency => next.urgency = value.parse()?,
        }
        Ok(next)
    }

    pub fn value(&self, field: FieldKey) -> &str {
        match field {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Subject => &self.subject,
            FieldKey::Message => &self.message,
            FieldKey::Urgency => self.urgency.as_str(),
        }
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_required(&self) -> Vec<FieldKey> {
        FieldKey::REQUIRED
            .into_iter()
            .filter(|key| self.value(*key).is_empty())
            .collect()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionState {
    pub fn is_editable(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Support ID shown to the user, e.g. `8A29-1B4C-9D0E`.
    pub reference: String,
    pub submitted_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_parsing() {
        for key in FieldKey::ALL {
            assert_eq!(key.as_str().parse::<FieldKey>().unwrap(), key);
        }
        assert!(matches!(
            "phone".parse::<FieldKey>(),
            Err(FormError::InvalidField(name)) if name == "phone"
        ));
        assert!("Name".parse::<FieldKey>().is_err());
    }

    #[test]
    fn test_urgency_defaults_to_normal() {
        assert_eq!(FormFields::default().urgency, Urgency::Normal);
        assert!("critical".parse::<Urgency>().is_err());
        assert_eq!("urgent".parse::<Urgency>().unwrap(), Urgency::Urgent);
    }

    #[test]
    fn test_urgency_wire_format() {
        let json = serde_json::to_string(&Urgency::High).unwrap();
        assert_eq!(json, "\"high\"");
        let fields: FormFields = serde_json::from_str(
            r#"{"name":"a","email":"b","subject":"c","message":"d","urgency":"low"}"#,
        )
        .unwrap();
        assert_eq!(fields.urgency, Urgency::Low);
    }

    #[test]
    fn test_with_field_keeps_other_fields() {
        let base = FormFields {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        };
        let next = base.with_field(FieldKey::Subject, "Help").unwrap();
        assert_eq!(next.subject, "Help");
        assert_eq!(next.name, base.name);
        assert_eq!(next.email, base.email);
        assert_eq!(next.message, base.message);
        assert_eq!(next.urgency, base.urgency);
        // the source record is never mutated
        assert!(base.subject.is_empty());
    }

    #[test]
    fn test_missing_required() {
        let fields = FormFields {
            email: "jane@x.com".to_string(),
            subject: "Help".to_string(),
            ..Default::default()
        };
        assert_eq!(
            fields.missing_required(),
            vec![FieldKey::Name, FieldKey::Message]
        );
    }
}
