//! Customer attribute definitions and their per-customer values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer attribute definition (name + value type), store-wide.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// "string", "number", or "date".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

/// The value of an attribute on one customer.
///
/// Values are transported as strings regardless of the attribute's
/// declared type.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct AttributeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_field_renames_on_the_wire() {
        let attribute = Attribute {
            name: Some("Shoe size".into()),
            attribute_type: Some("number".into()),
            ..Default::default()
        };

        let json = serde_json::to_value(&attribute).unwrap();
        assert_eq!(json["type"], "number");
        assert!(json.get("attribute_type").is_none());

        let parsed: Attribute = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.attribute_type.as_deref(), Some("number"));
    }

    #[test]
    fn test_attribute_value_round_trip() {
        let value = AttributeValue {
            id: Some(3),
            customer_id: Some(1),
            attribute_id: Some(7),
            value: Some("9.5".into()),
            ..Default::default()
        };

        let json = serde_json::to_string(&value).unwrap();
        let parsed: AttributeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
