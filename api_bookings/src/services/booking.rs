use std::collections::HashMap;

use common::{
    error::{AppError, Res},
    misc::BookingStatus,
};
use db::{
    Store,
    dtos::booking::{BookingCreateRequest, BookingUpdateRequest},
    models::{booking::Booking, summary::MonthlySummary},
};
use uuid::Uuid;

use crate::dtos::booking::{BookingListItem, CreateBookingRequest};

/// Books a venue for the single day starting at `start_date`.
///
/// The price is the building's current `price_per_day`, copied into the
/// booking. The user id is stored as given without a lookup.
pub fn create_booking(store: &Store, req: CreateBookingRequest) -> Res<Booking> {
    let building = db::building::get_building_by_id(store, req.building_id)
        .ok_or_else(|| AppError::not_found("building", req.building_id))?;

    let end_date = req
        .start_date
        .succ_opt()
        .ok_or_else(|| AppError::BadRequest(format!("{} has no next day", req.start_date)))?;

    let booking = db::booking::insert_booking(
        store,
        BookingCreateRequest {
            building_id: building.id,
            user_id: req.user_id,
            start_date: req.start_date,
            end_date,
            payment_proof: None,
            total_price: building.price_per_day,
            google_calendar_event_id: None,
        },
    );
    log::info!(
        "Booking {} requested for {} on {}",
        booking.id,
        building.name,
        booking.start_date
    );
    Ok(booking)
}

pub fn get_booking_by_id(store: &Store, booking_id: Uuid) -> Res<Booking> {
    db::booking::get_booking_by_id(store, booking_id)
        .ok_or_else(|| AppError::not_found("booking", booking_id))
}

pub fn get_user_bookings(store: &Store, user_id: Uuid) -> Vec<Booking> {
    db::booking::get_bookings_by_user_id(store, user_id)
}

/// All bookings with the name of the venue they point at.
pub fn get_booking_list(store: &Store) -> Vec<BookingListItem> {
    let names: HashMap<Uuid, String> = db::building::get_all_buildings(store)
        .into_iter()
        .map(|b| (b.id, b.name))
        .collect();

    db::booking::get_all_bookings(store)
        .into_iter()
        .map(|booking| BookingListItem {
            building_name: names.get(&booking.building_id).cloned(),
            booking,
        })
        .collect()
}

pub fn attach_payment_proof(store: &Store, booking_id: Uuid, payment_proof: String) -> Res<Booking> {
    update_booking(
        store,
        booking_id,
        BookingUpdateRequest {
            payment_proof: Some(payment_proof),
            ..Default::default()
        },
    )
}

/// Admin edit of any booking field.
///
/// A status change in the payload goes through the same review rule as
/// [`update_booking_status`]; repeating the current status is accepted.
pub fn update_booking(store: &Store, booking_id: Uuid, req: BookingUpdateRequest) -> Res<Booking> {
    if let Some(status) = req.status {
        let current = get_booking_by_id(store, booking_id)?;
        if status != current.status {
            ensure_reviewable(&current, status)?;
        }
    }
    db::booking::update_booking(store, booking_id, req)
        .ok_or_else(|| AppError::not_found("booking", booking_id))
}

/// Approves or rejects a pending booking.
///
/// A decision is final: approved and rejected bookings cannot be reviewed
/// again, and nothing can be sent back to pending.
pub fn update_booking_status(
    store: &Store,
    booking_id: Uuid,
    status: BookingStatus,
) -> Res<Booking> {
    let current = get_booking_by_id(store, booking_id)?;
    ensure_reviewable(&current, status)?;

    let booking = db::booking::update_booking_status(store, booking_id, status)
        .ok_or_else(|| AppError::not_found("booking", booking_id))?;
    log::info!("Booking {} {}", booking.id, status);
    Ok(booking)
}

fn ensure_reviewable(booking: &Booking, status: BookingStatus) -> Res<()> {
    if status == BookingStatus::Pending {
        return Err(AppError::BadRequest(format!(
            "Booking {} cannot be moved back to pending",
            booking.id
        )));
    }
    if booking.status != BookingStatus::Pending {
        return Err(AppError::BadRequest(format!(
            "Booking {} is already {}",
            booking.id, booking.status
        )));
    }
    Ok(())
}

pub fn delete_booking(store: &Store, booking_id: Uuid) -> Res<()> {
    if db::booking::delete_booking(store, booking_id) {
        Ok(())
    } else {
        Err(AppError::not_found("booking", booking_id))
    }
}

pub fn get_monthly_summary(store: &Store, year: Option<i32>) -> Vec<MonthlySummary> {
    match year {
        Some(year) => db::summary::get_monthly_booking_summary_for_year(store, year),
        None => db::summary::get_monthly_booking_summary(store),
    }
}
