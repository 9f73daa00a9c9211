//! Customer metafield records.
//!
//! Metafields attach namespaced key/value metadata to another resource.
//! `resource_id` names the owning resource and routes the request path
//! (`customers/{resource_id}/metafields`), so create and update require it
//! to be present on the input record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A metafield attached to a customer.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The id of the resource this metafield belongs to. Required on
    /// create and update input; stripped from the request body because it
    /// is carried by the path instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Visibility of the metafield to other API consumers, e.g.
    /// "app_only", "read", "write".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metafield_round_trip() {
        let metafield = Metafield {
            id: Some(11),
            resource_id: Some(42),
            namespace: Some("loyalty".into()),
            key: Some("tier".into()),
            value: Some("gold".into()),
            permission_set: Some("app_only".into()),
            resource_type: Some("customer".into()),
            ..Default::default()
        };

        let json = serde_json::to_string(&metafield).unwrap();
        let parsed: Metafield = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metafield);
    }

    #[test]
    fn test_metafield_deserializes_server_response() {
        let json = concat!(
            r#"{"id":11,"resource_id":42,"namespace":"loyalty","key":"tier","#,
            r#""value":"gold","permission_set":"app_only","resource_type":"customer","#,
            r#""date_created":"2024-06-01T10:00:00Z"}"#
        );

        let metafield: Metafield = serde_json::from_str(json).unwrap();
        assert_eq!(metafield.id, Some(11));
        assert_eq!(metafield.resource_id, Some(42));
        assert_eq!(metafield.key.as_deref(), Some("tier"));
        assert!(metafield.date_created.is_some());
    }
}
