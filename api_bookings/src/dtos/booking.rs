use chrono::NaiveDate;
use common::misc::BookingStatus;
use db::models::booking::Booking;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client's request to book one venue for one day.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub building_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProofRequest {
    pub payment_proof: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryQuery {
    pub year: Option<i32>,
}

/// Row of the admin bookings table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListItem {
    #[serde(flatten)]
    pub booking: Booking,
    /// `None` once the venue has been deleted.
    pub building_name: Option<String>,
}
