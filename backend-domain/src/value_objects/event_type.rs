// Event type value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Checkin,
    Checkout,
    RoomChange,
    RoomStatusChange,
    BookingCreated,
    BookingCancelled,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Checkin => "checkin",
            EventType::Checkout => "checkout",
            EventType::RoomChange => "room_change",
            EventType::RoomStatusChange => "room_status_change",
            EventType::BookingCreated => "booking_created",
            EventType::BookingCancelled => "booking_cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "checkin" => Some(EventType::Checkin),
            "checkout" => Some(EventType::Checkout),
            "room_change" => Some(EventType::RoomChange),
            "room_status_change" => Some(EventType::RoomStatusChange),
            "booking_created" => Some(EventType::BookingCreated),
            "booking_cancelled" => Some(EventType::BookingCancelled),
            _ => None,
        }
    }
}
