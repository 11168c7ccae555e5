use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "awaiting confirmation")]
    AwaitingConfirmation,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "canceled")]
    Canceled,
}

/// A guest service request as stored in the flat JSON document.
///
/// Lower `priority` numbers sort first when listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: String,
    pub guest_name: String,
    pub room_number: i64,
    pub request_details: String,
    pub priority: i64,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Creation payload for `POST /requests`. All fields are required;
/// missing or mistyped fields are rejected at deserialization instead
/// of propagating into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequest {
    pub guest_name: String,
    pub room_number: i64,
    pub request_details: String,
    pub priority: i64,
}

/// Partial update for `PUT /requests/:id`. Only supplied fields
/// overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl ServiceRequest {
    pub fn apply(&mut self, update: RequestUpdate) {
        if let Some(guest_name) = update.guest_name {
            self.guest_name = guest_name;
        }
        if let Some(room_number) = update.room_number {
            self.room_number = room_number;
        }
        if let Some(request_details) = update.request_details {
            self.request_details = request_details;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
    }
}
