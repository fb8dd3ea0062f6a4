//! Lead submission payload shared by the form client and the submission endpoint

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One prospective customer's contact details as posted by the offer form.
///
/// Every field is optional on the wire: the endpoint forwards whatever arrived
/// without schema validation. Non-string values keep their JSON text. The client
/// always fills all seven keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    #[serde(deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company_website: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email_address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub property_description: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl LeadSubmission {
    /// Reads a lead out of an arbitrary JSON body.
    ///
    /// Objects are read key by key. Arrays and scalars carry no named fields, so every
    /// field is absent. A `null` body is an error.
    pub fn from_json(body: Value) -> Result<Self, serde_json::Error> {
        match body {
            Value::Object(_) => serde_json::from_value(body),
            Value::Null => Err(de::Error::custom("submission body is null")),
            _ => Ok(Self::default()),
        }
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }

    pub fn company_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or_default()
    }

    /// The website, only when one was actually entered.
    pub fn company_website(&self) -> Option<&str> {
        self.company_website.as_deref().filter(|w| !w.is_empty())
    }

    pub fn email_address(&self) -> &str {
        self.email_address.as_deref().unwrap_or_default()
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_deref().unwrap_or_default()
    }

    pub fn property_description(&self) -> &str {
        self.property_description.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_keys() {
        let lead = LeadSubmission {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            company_name: Some("Acme Hotels".to_string()),
            company_website: Some(String::new()),
            email_address: Some("jane@acme.com".to_string()),
            phone_number: Some(String::new()),
            property_description: Some("Boutique 40-room hotel".to_string()),
        };

        let value = serde_json::to_value(&lead).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "companyName",
                "companyWebsite",
                "emailAddress",
                "firstName",
                "lastName",
                "phoneNumber",
                "propertyDescription",
            ]
        );
    }

    #[test]
    fn test_missing_fields_are_forwarded_as_absent() {
        let lead: LeadSubmission = serde_json::from_value(json!({
            "companyName": "Acme Hotels",
            "phoneNumber": null
        }))
        .unwrap();

        assert_eq!(lead.company_name(), "Acme Hotels");
        assert!(lead.first_name.is_none());
        assert!(lead.phone_number.is_none());
        assert_eq!(lead.first_name(), "");
    }

    #[test]
    fn test_empty_website_is_treated_as_absent() {
        let mut lead = LeadSubmission::default();
        assert_eq!(lead.company_website(), None);

        lead.company_website = Some(String::new());
        assert_eq!(lead.company_website(), None);

        lead.company_website = Some("acme.com".to_string());
        assert_eq!(lead.company_website(), Some("acme.com"));
    }

    #[test]
    fn test_non_string_values_keep_their_text() {
        let lead: LeadSubmission = serde_json::from_value(json!({
            "firstName": 42,
            "lastName": true,
            "phoneNumber": 5551234
        }))
        .unwrap();

        assert_eq!(lead.first_name(), "42");
        assert_eq!(lead.last_name(), "true");
        assert_eq!(lead.phone_number(), "5551234");
    }

    #[test]
    fn test_from_json_ignores_non_object_bodies() {
        let lead = LeadSubmission::from_json(json!(["Jane", "Doe", "Acme Hotels"])).unwrap();
        assert_eq!(lead, LeadSubmission::default());

        let lead = LeadSubmission::from_json(json!("Jane")).unwrap();
        assert_eq!(lead, LeadSubmission::default());

        assert!(LeadSubmission::from_json(Value::Null).is_err());

        let lead = LeadSubmission::from_json(json!({ "companyName": "Acme Hotels" })).unwrap();
        assert_eq!(lead.company_name(), "Acme Hotels");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let lead: LeadSubmission = serde_json::from_value(json!({
            "firstName": "Jane",
            "email": "jane@acme.com"
        }))
        .unwrap();

        assert_eq!(lead.first_name(), "Jane");
        assert!(lead.email_address.is_none());
    }
}
