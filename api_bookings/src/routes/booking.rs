use std::sync::Arc;

use actix_web::{
    Responder, delete, get, post, put,
    web::{self},
};
use common::{error::Res, http::Success, misc::BookingStatus};
use db::{Store, dtos::booking::BookingUpdateRequest};
use uuid::Uuid;

use crate::{
    dtos::booking::{CreateBookingRequest, PaymentProofRequest, StatusUpdateRequest},
    services,
};

/// Submits a booking request for one venue and one day.
///
/// # Arguments
///
/// * `store` - The in-memory store.
/// * `req` - `buildingId`, `userId` and `startDate` (`YYYY-MM-DD`).
///
/// # Returns
///
/// 201 with the pending booking, priced at the venue's current daily rate,
/// or 404 when the venue does not exist.
#[post("")]
pub async fn post_booking(
    store: web::Data<Arc<Store>>,
    req: web::Json<CreateBookingRequest>,
) -> Res<impl Responder> {
    let booking = services::booking::create_booking(&store, req.into_inner())?;
    Success::created(booking)
}

#[get("/user/{user_id}")]
pub async fn get_user_bookings(
    store: web::Data<Arc<Store>>,
    user_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    Success::ok(services::booking::get_user_bookings(&store, user_id.into_inner()))
}

#[get("/{booking_id}")]
pub async fn get_booking(
    store: web::Data<Arc<Store>>,
    booking_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    let booking = services::booking::get_booking_by_id(&store, booking_id.into_inner())?;
    Success::ok(booking)
}

#[put("/{booking_id}/payment-proof")]
pub async fn put_payment_proof(
    store: web::Data<Arc<Store>>,
    booking_id: web::Path<Uuid>,
    req: web::Json<PaymentProofRequest>,
) -> Res<impl Responder> {
    let booking = services::booking::attach_payment_proof(
        &store,
        booking_id.into_inner(),
        req.into_inner().payment_proof,
    )?;
    Success::ok(booking)
}

/// Lists every booking together with its venue name.
#[get("")]
pub async fn get_bookings(store: web::Data<Arc<Store>>) -> Res<impl Responder> {
    Success::ok(services::booking::get_booking_list(&store))
}

#[put("/{booking_id}")]
pub async fn put_booking(
    store: web::Data<Arc<Store>>,
    booking_id: web::Path<Uuid>,
    req: web::Json<BookingUpdateRequest>,
) -> Res<impl Responder> {
    let booking =
        services::booking::update_booking(&store, booking_id.into_inner(), req.into_inner())?;
    Success::ok(booking)
}

/// Approves or rejects a pending booking; decided bookings answer 400.
#[put("/{booking_id}/status")]
pub async fn put_status(
    store: web::Data<Arc<Store>>,
    booking_id: web::Path<Uuid>,
    req: web::Json<StatusUpdateRequest>,
) -> Res<impl Responder> {
    let booking = services::booking::update_booking_status(
        &store,
        booking_id.into_inner(),
        req.into_inner().status,
    )?;
    Success::ok(booking)
}

#[post("/{booking_id}/approve")]
pub async fn post_approve(
    store: web::Data<Arc<Store>>,
    booking_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    let booking = services::booking::update_booking_status(
        &store,
        booking_id.into_inner(),
        BookingStatus::Approved,
    )?;
    Success::ok(booking)
}

#[post("/{booking_id}/reject")]
pub async fn post_reject(
    store: web::Data<Arc<Store>>,
    booking_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    let booking = services::booking::update_booking_status(
        &store,
        booking_id.into_inner(),
        BookingStatus::Rejected,
    )?;
    Success::ok(booking)
}

#[delete("/{booking_id}")]
pub async fn delete_booking(
    store: web::Data<Arc<Store>>,
    booking_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    services::booking::delete_booking(&store, booking_id.into_inner())?;
    Success::deleted()
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::{mount_admin_bookings, mount_client_bookings};

    #[actix_web::test]
    async fn client_books_and_admin_reviews() {
        let store = db::setup(true);
        let client = db::user::get_user_by_email(&store, "client@example.com").unwrap();
        let hall = db::building::get_all_buildings(&store)
            .into_iter()
            .find(|b| b.name == "Exhibition Hall")
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(web::scope("/client").service(mount_client_bookings()))
                .service(web::scope("/admin").service(mount_admin_bookings())),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/client/bookings")
            .set_json(json!({
                "buildingId": hall.id,
                "userId": client.id,
                "startDate": "2025-12-31"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let booking: Value = test::read_body_json(resp).await;
        assert_eq!(booking["status"], "pending");
        assert_eq!(booking["endDate"], "2026-01-01");
        assert_eq!(booking["totalPrice"], 1200.0);
        let id = booking["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/client/bookings/user/{}", client.id))
            .to_request();
        let mine: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mine.as_array().map(Vec::len), Some(3));

        let req = test::TestRequest::post()
            .uri(&format!("/admin/bookings/{}/approve", id))
            .to_request();
        let approved: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(approved["status"], "approved");

        let req = test::TestRequest::post()
            .uri(&format!("/admin/bookings/{}/reject", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/admin/bookings").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let row = list
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["id"] == id.as_str())
            .unwrap();
        assert_eq!(row["buildingName"], "Exhibition Hall");
        assert_eq!(row["status"], "approved");
    }

    #[actix_web::test]
    async fn payment_proof_and_status_endpoint() {
        let store = db::setup(true);
        let pending = db::booking::get_all_bookings(&store)
            .into_iter()
            .find(|b| b.status == BookingStatus::Pending)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(web::scope("/client").service(mount_client_bookings()))
                .service(web::scope("/admin").service(mount_admin_bookings())),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/client/bookings/{}/payment-proof", pending.id))
            .set_json(json!({ "paymentProof": "transfer.png" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["paymentProof"], "transfer.png");

        let req = test::TestRequest::put()
            .uri(&format!("/admin/bookings/{}/status", pending.id))
            .set_json(json!({ "status": "approved" }))
            .to_request();
        let approved: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(approved["status"], "approved");
        assert_eq!(approved["paymentProof"], "transfer.png");

        let req = test::TestRequest::put()
            .uri(&format!("/admin/bookings/{}/status", pending.id))
            .set_json(json!({ "status": "pending" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri(&format!("/admin/bookings/{}/status", pending.id))
            .set_json(json!({ "status": "cancelled" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_booking_is_404() {
        let store = db::setup(false);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(mount_admin_bookings()),
        )
        .await;

        let missing = Uuid::new_v4();
        for req in [
            test::TestRequest::get().uri(&format!("/bookings/{}", missing)),
            test::TestRequest::post().uri(&format!("/bookings/{}/approve", missing)),
            test::TestRequest::delete().uri(&format!("/bookings/{}", missing)),
        ] {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn admin_partial_update_and_delete() {
        let store = db::setup(true);
        let booking = db::booking::get_all_bookings(&store).remove(0);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(mount_admin_bookings()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/bookings/{}", booking.id))
            .set_json(json!({ "googleCalendarEventId": "event9" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["googleCalendarEventId"], "event9");
        assert_eq!(updated["totalPrice"], 1000.0);

        let req = test::TestRequest::delete()
            .uri(&format!("/bookings/{}", booking.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(db::booking::get_all_bookings(&store).len(), 1);
    }

    #[actix_web::test]
    async fn decided_bookings_cannot_be_reviewed_again() {
        let store = db::setup(true);
        let approved = db::booking::get_all_bookings(&store)
            .into_iter()
            .find(|b| b.status == BookingStatus::Approved)
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(mount_admin_bookings()),
        )
        .await;

        for req in [
            test::TestRequest::post().uri(&format!("/bookings/{}/reject", approved.id)),
            test::TestRequest::post().uri(&format!("/bookings/{}/approve", approved.id)),
            test::TestRequest::put()
                .uri(&format!("/bookings/{}/status", approved.id))
                .set_json(json!({ "status": "pending" })),
            test::TestRequest::put()
                .uri(&format!("/bookings/{}", approved.id))
                .set_json(json!({ "status": "rejected" })),
        ] {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        let current = db::booking::get_booking_by_id(&store, approved.id).unwrap();
        assert_eq!(current.status, BookingStatus::Approved);
    }
}
