use chrono::{NaiveDate, NaiveDateTime};
use common::misc::BookingStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single-venue booking request.
///
/// `total_price` is copied from the building when the booking is made and
/// never follows later price changes. `building_id` and `user_id` may point
/// at records that have since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub building_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub payment_proof: Option<String>,
    pub total_price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub google_calendar_event_id: Option<String>,
}
