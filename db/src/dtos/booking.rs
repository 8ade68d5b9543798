use chrono::NaiveDate;
use common::misc::BookingStatus;
use serde::Deserialize;
use uuid::Uuid;

/// Everything a new booking carries except what the store stamps itself:
/// id, timestamps and the initial `pending` status.
#[derive(Debug, Clone)]
pub struct BookingCreateRequest {
    pub building_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_proof: Option<String>,
    pub total_price: f64,
    pub google_calendar_event_id: Option<String>,
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdateRequest {
    pub building_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
    pub payment_proof: Option<String>,
    pub total_price: Option<f64>,
    pub google_calendar_event_id: Option<String>,
}
