use chrono::Utc;
use tracing::warn;

use backend_domain::{
    generate_event_id, ComplianceStatus, EventData, EventType, HotelEvent, IngestAck,
    IngestPayload, SourceSystem,
};

use crate::postprocess::PostProcessJob;
use crate::{AppError, AppState};

/// Validates and normalizes a raw producer payload, persists the event,
/// and enqueues post-processing. The enqueue is fire-and-forget: a full
/// queue is logged and the caller still gets its ack, because the event
/// is already durable.
pub async fn submit_event(state: &AppState, payload: IngestPayload) -> Result<IngestAck, AppError> {
    let event = build_event(&payload)?;

    if let Err(err) = state.event_repo.append(&event).await {
        state.metrics.record_ingest_error();
        return Err(err.into());
    }
    state.metrics.record_ingest();

    let job = PostProcessJob::new(event.event_id.clone());
    if state.postprocess_tx.try_send(job).is_err() {
        warn!(event_id = %event.event_id, "post-processing queue full, event left unprocessed");
    }

    Ok(IngestAck {
        event_id: event.event_id,
        timestamp: event.timestamp,
    })
}

fn build_event(payload: &IngestPayload) -> Result<HotelEvent, AppError> {
    let raw_type = payload
        .event_type
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| missing_field("event_type"))?;
    let event_type = EventType::parse(raw_type)
        .ok_or_else(|| AppError::Validation(format!("unknown event_type: {}", raw_type)))?;
    let hotel_id = payload.hotel_id.ok_or_else(|| missing_field("hotel_id"))?;
    let booking_id = payload.booking_id.ok_or_else(|| missing_field("booking_id"))?;

    let event_data = EventData::from_raw(event_type, payload.event_data.clone())
        .map_err(|err| AppError::Validation(format!("malformed event_data: {}", err)))?;

    let source_system = match payload.source_system.as_deref() {
        None => SourceSystem::default(),
        Some(raw) => SourceSystem::parse(raw)
            .ok_or_else(|| AppError::Validation(format!("unknown source_system: {}", raw)))?,
    };

    let now = Utc::now();
    Ok(HotelEvent {
        event_id: generate_event_id(now),
        event_type,
        hotel_id,
        hotel_name: payload.hotel_name.clone(),
        room_id: payload.room_id,
        room_number: payload.room_number.clone(),
        room_type: payload.room_type.clone(),
        booking_id,
        customer_id: payload.customer_id,
        guest_name: payload.guest_name.clone(),
        guest_email: payload.guest_email.clone(),
        guest_phone: payload.guest_phone.clone(),
        guest_nationality: payload.guest_nationality.clone(),
        event_data,
        source_system,
        location: payload.location.clone(),
        timestamp: payload.timestamp.unwrap_or(now),
        processed: false,
        processed_at: None,
        compliance_status: ComplianceStatus::Pending,
        compliance_notes: None,
        reported_to_authority: false,
        authority_report_date: None,
    })
}

fn missing_field(field: &str) -> AppError {
    AppError::Validation(format!("Missing required field: {}", field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> IngestPayload {
        serde_json::from_value(json!({
            "event_type": "checkout",
            "hotel_id": 3,
            "booking_id": 42,
            "guest_nationality": "DE",
            "event_data": {
                "final_bill": 180.5,
                "additional_charges": [{"description": "minibar", "amount": 12.0}]
            }
        }))
        .unwrap()
    }

    #[test]
    fn build_event_normalizes_the_payload() {
        let event = build_event(&payload()).unwrap();
        assert_eq!(event.event_type, EventType::Checkout);
        assert_eq!(event.hotel_id, 3);
        assert_eq!(event.booking_id, 42);
        assert_eq!(event.source_system, SourceSystem::Pms);
        assert_eq!(event.compliance_status, ComplianceStatus::Pending);
        assert!(!event.processed);
        assert!(event.event_id.starts_with("evt_"));
        let checkout = event.event_data.as_checkout().unwrap();
        assert_eq!(checkout.final_bill, Some(180.5));
        assert_eq!(checkout.additional_charges.len(), 1);
    }

    #[test]
    fn build_event_rejects_missing_required_fields() {
        for field in ["event_type", "hotel_id", "booking_id"] {
            let mut raw = json!({
                "event_type": "checkin",
                "hotel_id": 1,
                "booking_id": 2
            });
            raw.as_object_mut().unwrap().remove(field);
            let payload: IngestPayload = serde_json::from_value(raw).unwrap();
            match build_event(&payload) {
                Err(AppError::Validation(message)) => assert!(message.contains(field)),
                other => panic!("expected validation error, got {:?}", other.map(|_| ())),
            }
        }
    }

    #[test]
    fn build_event_rejects_unknown_event_type() {
        let payload: IngestPayload = serde_json::from_value(json!({
            "event_type": "teleport",
            "hotel_id": 1,
            "booking_id": 2
        }))
        .unwrap();
        assert!(matches!(
            build_event(&payload),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn build_event_defaults_event_data_to_empty_variant() {
        let payload: IngestPayload = serde_json::from_value(json!({
            "event_type": "checkin",
            "hotel_id": 1,
            "booking_id": 2
        }))
        .unwrap();
        let event = build_event(&payload).unwrap();
        assert!(matches!(event.event_data, EventData::Checkin(_)));
    }
}
