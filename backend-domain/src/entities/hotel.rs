// Hotel registry entity
// Created at onboarding, logically deleted via is_active

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: i64,
    pub hotel_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tourism_license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rooms: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub room_types: Vec<RoomTypeInventory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_settings: Option<ApiSettings>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeInventory {
    pub type_id: i64,
    pub type_name: String,
    pub room_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default)]
    pub sync_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
}

impl Hotel {
    /// Copy with the integration credential stripped. Every read path
    /// returns hotels through this.
    pub fn redacted(&self) -> Self {
        let mut hotel = self.clone();
        if let Some(settings) = hotel.api_settings.as_mut() {
            settings.api_key = None;
        }
        hotel
    }
}
