//! Inventory item records.
//!
//! Inventory is read per item: the identity names the product/variant/SKU
//! and each location entry carries that location's stock levels.

use serde::{Deserialize, Serialize};

/// What an inventory item refers to.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InventoryIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
}

/// Stock levels of one item at one location.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InventoryLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to_sell: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_inventory_onhand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_stock: Option<bool>,
}

/// An inventory item with its per-location levels.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Inventory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<InventoryIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<InventoryLocation>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_deserializes_nested_locations() {
        let json = concat!(
            r#"{"identity":{"sku":"SKU-1","variant_id":101,"product_id":77},"#,
            r#""locations":[{"location_id":1,"location_code":"BC-LOCATION-1","#,
            r#""available_to_sell":10,"total_inventory_onhand":12,"is_in_stock":true}]}"#
        );

        let inventory: Inventory = serde_json::from_str(json).unwrap();

        let identity = inventory.identity.unwrap();
        assert_eq!(identity.sku.as_deref(), Some("SKU-1"));
        assert_eq!(identity.product_id, Some(77));

        let locations = inventory.locations.unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].available_to_sell, Some(10));
        assert_eq!(locations[0].is_in_stock, Some(true));
    }

    #[test]
    fn test_inventory_round_trip() {
        let inventory = Inventory {
            identity: Some(InventoryIdentity {
                sku: Some("SKU-2".into()),
                variant_id: Some(5),
                product_id: Some(6),
            }),
            locations: Some(vec![InventoryLocation {
                location_id: Some(1),
                available_to_sell: Some(3),
                ..Default::default()
            }]),
        };

        let json = serde_json::to_string(&inventory).unwrap();
        let parsed: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inventory);
    }
}
