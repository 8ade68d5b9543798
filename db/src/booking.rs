use common::misc::BookingStatus;
use uuid::Uuid;

use crate::{
    Store,
    dtos::booking::{BookingCreateRequest, BookingUpdateRequest},
    models::booking::Booking,
    now,
};

pub fn get_all_bookings(store: &Store) -> Vec<Booking> {
    store.bookings.read().clone()
}

pub fn get_booking_by_id(store: &Store, booking_id: Uuid) -> Option<Booking> {
    store
        .bookings
        .read()
        .iter()
        .find(|b| b.id == booking_id)
        .cloned()
}

pub fn get_bookings_by_user_id(store: &Store, user_id: Uuid) -> Vec<Booking> {
    store
        .bookings
        .read()
        .iter()
        .filter(|b| b.user_id == user_id)
        .cloned()
        .collect()
}

/// Appends a new booking in `pending` state.
pub fn insert_booking(store: &Store, data: BookingCreateRequest) -> Booking {
    let stamp = now();
    let booking = Booking {
        id: Uuid::new_v4(),
        building_id: data.building_id,
        user_id: data.user_id,
        start_date: data.start_date,
        end_date: data.end_date,
        status: BookingStatus::Pending,
        payment_proof: data.payment_proof,
        total_price: data.total_price,
        created_at: stamp,
        updated_at: stamp,
        google_calendar_event_id: data.google_calendar_event_id,
    };
    store.bookings.write().push(booking.clone());
    log::debug!(
        "Created booking {} for building {} on {}",
        booking.id,
        booking.building_id,
        booking.start_date
    );
    booking
}

/// Merges the provided fields and refreshes `updated_at`.
pub fn update_booking(
    store: &Store,
    booking_id: Uuid,
    data: BookingUpdateRequest,
) -> Option<Booking> {
    let mut bookings = store.bookings.write();
    let booking = bookings.iter_mut().find(|b| b.id == booking_id)?;

    if let Some(building_id) = data.building_id {
        booking.building_id = building_id;
    }
    if let Some(user_id) = data.user_id {
        booking.user_id = user_id;
    }
    if let Some(start_date) = data.start_date {
        booking.start_date = start_date;
    }
    if let Some(end_date) = data.end_date {
        booking.end_date = end_date;
    }
    if let Some(status) = data.status {
        booking.status = status;
    }
    if let Some(payment_proof) = data.payment_proof {
        booking.payment_proof = Some(payment_proof);
    }
    if let Some(total_price) = data.total_price {
        booking.total_price = total_price;
    }
    if let Some(event_id) = data.google_calendar_event_id {
        booking.google_calendar_event_id = Some(event_id);
    }
    booking.updated_at = now();
    Some(booking.clone())
}

/// Sets the status unconditionally; an approved booking can still be rejected.
pub fn update_booking_status(
    store: &Store,
    booking_id: Uuid,
    status: BookingStatus,
) -> Option<Booking> {
    let mut bookings = store.bookings.write();
    let booking = bookings.iter_mut().find(|b| b.id == booking_id)?;
    booking.status = status;
    booking.updated_at = now();
    log::debug!("Booking {} is now {}", booking_id, status);
    Some(booking.clone())
}

pub fn delete_booking(store: &Store, booking_id: Uuid) -> bool {
    let mut bookings = store.bookings.write();
    match bookings.iter().position(|b| b.id == booking_id) {
        Some(index) => {
            bookings.remove(index);
            log::debug!("Deleted booking {}", booking_id);
            true
        }
        None => false,
    }
}
