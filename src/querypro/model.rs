use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer-submitted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    // `_id` keeps the shape existing dashboards already read.
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Enquiry {
    pub fn new(fields: NewEnquiry) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            message: fields.message,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field. Returns whether anything changed;
    /// `updated_at` only moves when it did.
    pub fn apply(&mut self, fields: NewEnquiry) -> bool {
        if self.fields() == fields {
            return false;
        }
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
        self.message = fields.message;
        self.updated_at = Utc::now();
        true
    }

    pub fn fields(&self) -> NewEnquiry {
        NewEnquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

/// The four user-editable fields, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl NewEnquiry {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Name of the first required field that is empty, if any.
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Request payload for create and update.
///
/// Every field is optional so a missing key surfaces as a validation
/// error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EnquiryFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            message: Some(message.into()),
        }
    }
}

impl From<NewEnquiry> for EnquiryFields {
    fn from(fields: NewEnquiry) -> Self {
        Self::new(fields.name, fields.email, fields.phone, fields.message)
    }
}

impl From<&Enquiry> for EnquiryFields {
    fn from(enquiry: &Enquiry) -> Self {
        enquiry.fields().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewEnquiry {
        NewEnquiry::new("Ada", "ada@example.com", "+44 20 7946 0958", "Hello there!")
    }

    #[test]
    fn serializes_with_mongo_style_id_and_camel_case_timestamps() {
        let enquiry = Enquiry::new(sample());
        let json = serde_json::to_value(&enquiry).unwrap();

        assert_eq!(json["_id"], enquiry.id.to_string());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn accepts_plain_id_on_input() {
        let enquiry = Enquiry::new(sample());
        let mut json = serde_json::to_value(&enquiry).unwrap();
        let id = json["_id"].take();
        json.as_object_mut().unwrap().remove("_id");
        json["id"] = id;

        let parsed: Enquiry = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.id, enquiry.id);
    }

    #[test]
    fn apply_reports_unchanged_fields() {
        let mut enquiry = Enquiry::new(sample());
        let before = enquiry.updated_at;

        assert!(!enquiry.apply(sample()));
        assert_eq!(enquiry.updated_at, before);

        let mut changed = sample();
        changed.message = "A different message".into();
        assert!(enquiry.apply(changed));
        assert_eq!(enquiry.message, "A different message");
    }

    #[test]
    fn first_missing_reports_blank_fields_in_form_order() {
        let mut fields = sample();
        assert_eq!(fields.first_missing(), None);

        fields.phone = "   ".into();
        fields.message = String::new();
        assert_eq!(fields.first_missing(), Some("phone"));
    }

    #[test]
    fn missing_keys_deserialize_as_none() {
        let fields: EnquiryFields = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(fields.name.as_deref(), Some("Ada"));
        assert!(fields.email.is_none());
    }
}
