//! Wire types for the HomeBox API
//!
//! All entities are server-owned; these are transient client-side copies of
//! what the backend returns, camelCase on the wire. Optional fields are
//! omitted from request bodies when unset.

use serde::{Deserialize, Serialize};

/// Envelope the backend wraps single records in on some endpoints,
/// e.g. `GET /users/self` returns `{"item": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Wrapped<T> {
    pub item: T,
}

/// Token pair returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub token: String,
    pub expires_at: String,
}

/// The authenticated user's identity record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_superuser: bool,
    pub is_owner: bool,
    pub group_id: String,
    pub group_name: String,
}

/// Editable fields of the current user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

/// Group-wide inventory totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatistics {
    pub total_users: u64,
    pub total_items: u64,
    pub total_locations: u64,
    pub total_labels: u64,
    pub total_item_price: f64,
    pub total_with_warranty: u64,
}

/// Backend health probe response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub health: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Abbreviated record used where items reference their location and labels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Photo or document attached to an item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAttachment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub primary: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Custom key/value field on an item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemField {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
}

/// A full inventory record.
///
/// Every item belongs to exactly one location (`location` is only absent
/// transiently, while a form is mid-edit) and zero or more labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub location: Option<ItemSummary>,
    #[serde(default)]
    pub labels: Vec<ItemSummary>,
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub model_number: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub thumbnail_id: Option<String>,
    #[serde(default)]
    pub insured: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default)]
    pub purchase_from: Option<String>,
    #[serde(default)]
    pub lifetime_warranty: bool,
    #[serde(default)]
    pub warranty_expires: Option<String>,
    #[serde(default)]
    pub warranty_details: Option<String>,
    #[serde(default)]
    pub sold_time: Option<String>,
    #[serde(default)]
    pub sold_to: Option<String>,
    #[serde(default)]
    pub sold_price: Option<f64>,
    #[serde(default)]
    pub sold_notes: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub attachments: Vec<ItemAttachment>,
    #[serde(default)]
    pub fields: Vec<ItemField>,
}

/// Fields accepted when creating an item
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreate {
    pub name: String,
    pub description: String,
    pub location_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Partial update of an item; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_warranty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_expires: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One page of item results
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage {
    pub items: Vec<Item>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    pub total: u64,
}

/// A node in the location tree.
///
/// Locations are self-referential and form a forest; acyclicity is
/// enforced by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub parent: Option<Box<Location>>,
    #[serde(default)]
    pub children: Vec<Location>,
}

/// Fields accepted when creating or updating a location
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCreate {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A flat tag, many-to-many with items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when creating or updating a label
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCreate {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A maintenance record belonging to exactly one item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: f64,
    pub scheduled_date: String,
    #[serde(default)]
    pub completed_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Maintenance entry joined with its owning item, as returned by the
/// group-wide listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEntryWithDetails {
    #[serde(flatten)]
    pub entry: MaintenanceEntry,
    #[serde(rename = "itemID")]
    pub item_id: String,
    pub item_name: String,
}

/// Fields accepted when creating a maintenance entry
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEntryCreate {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub scheduled_date: String,
}

/// Full replacement of a maintenance entry
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEntryUpdate {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub scheduled_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

/// Status filter for maintenance listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceFilterStatus {
    Scheduled,
    Completed,
    Both,
}

impl MaintenanceFilterStatus {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Both => "both",
        }
    }
}

impl MaintenanceEntry {
    /// A set completed date classifies the entry as completed;
    /// anything else counts as scheduled.
    pub fn is_completed(&self) -> bool {
        self.completed_date
            .as_deref()
            .map(|date| !date.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_deserializes_with_missing_optionals() {
        let item: Item = serde_json::from_value(json!({
            "id": "i1",
            "name": "Drill",
            "quantity": 1,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(item.name, "Drill");
        assert!(item.location.is_none());
        assert!(item.labels.is_empty());
        assert!(item.attachments.is_empty());
    }

    #[test]
    fn item_update_skips_unset_fields() {
        let update = ItemUpdate {
            name: Some("Drill".to_string()),
            quantity: Some(2),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"name": "Drill", "quantity": 2}));
    }

    #[test]
    fn maintenance_entry_with_details_flattens() {
        let entry: MaintenanceEntryWithDetails = serde_json::from_value(json!({
            "id": "m1",
            "name": "Oil change",
            "description": "",
            "cost": 49.5,
            "scheduledDate": "2024-06-01",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "itemID": "i1",
            "itemName": "Mower"
        }))
        .unwrap();

        assert_eq!(entry.entry.cost, 49.5);
        assert_eq!(entry.item_id, "i1");
        assert_eq!(entry.item_name, "Mower");
    }

    #[test]
    fn completed_classification() {
        let mut entry = MaintenanceEntry {
            id: "m1".to_string(),
            name: "Service".to_string(),
            description: String::new(),
            cost: 0.0,
            scheduled_date: "2024-06-01".to_string(),
            completed_date: None,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert!(!entry.is_completed());

        entry.completed_date = Some(String::new());
        assert!(!entry.is_completed());

        entry.completed_date = Some("2024-06-02".to_string());
        assert!(entry.is_completed());
    }
}
