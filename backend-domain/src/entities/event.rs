// Hotel operations event entity
// Immutable once written, except for the post-processing bookkeeping flags

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::{ComplianceStatus, EventType, SourceSystem};

#[derive(Debug, Clone, Serialize)]
pub struct HotelEvent {
    pub event_id: String,
    pub event_type: EventType,
    pub hotel_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    pub booking_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_nationality: Option<String>,
    pub event_data: EventData,
    pub source_system: SourceSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub timestamp: DateTime<Utc>,
    pub processed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    pub compliance_status: ComplianceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_notes: Option<String>,
    pub reported_to_authority: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_report_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

/// Per-type event payload. The variant is keyed by the sibling
/// `event_type` field, so billing fields exist only on checkouts and
/// verification fields only on check-ins.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EventData {
    Checkin(CheckinData),
    Checkout(CheckoutData),
    RoomChange(RoomChangeData),
    RoomStatusChange(RoomStatusChangeData),
    BookingCreated(BookingData),
    BookingCancelled(BookingData),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckinData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_check_in: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_verification_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_check_out: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_charges: Vec<AdditionalCharge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_bill: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalCharge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomChangeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomStatusChangeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

impl EventData {
    /// Builds the typed payload for `event_type` from a loose JSON object.
    /// A missing payload yields the empty variant for that type.
    pub fn from_raw(event_type: EventType, raw: Option<Value>) -> Result<Self, serde_json::Error> {
        let raw = raw.unwrap_or_else(|| Value::Object(Default::default()));
        Ok(match event_type {
            EventType::Checkin => EventData::Checkin(serde_json::from_value(raw)?),
            EventType::Checkout => EventData::Checkout(serde_json::from_value(raw)?),
            EventType::RoomChange => EventData::RoomChange(serde_json::from_value(raw)?),
            EventType::RoomStatusChange => {
                EventData::RoomStatusChange(serde_json::from_value(raw)?)
            }
            EventType::BookingCreated => EventData::BookingCreated(serde_json::from_value(raw)?),
            EventType::BookingCancelled => {
                EventData::BookingCancelled(serde_json::from_value(raw)?)
            }
        })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }

    pub fn as_checkout(&self) -> Option<&CheckoutData> {
        match self {
            EventData::Checkout(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_room_status_change(&self) -> Option<&RoomStatusChangeData> {
        match self {
            EventData::RoomStatusChange(data) => Some(data),
            _ => None,
        }
    }
}
