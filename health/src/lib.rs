use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::{error::Res, http::Success};
use db::Store;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    users: usize,
    buildings: usize,
    bookings: usize,
}

/// Liveness probe reporting the size of each collection.
#[get("")]
async fn get_health(store: web::Data<Arc<Store>>) -> Res<impl Responder> {
    let report = HealthReport {
        status: "ok",
        users: db::user::get_all_users(&store).len(),
        buildings: db::building::get_all_buildings(&store).len(),
        bookings: db::booking::get_all_bookings(&store).len(),
    };
    log::debug!("Health check: {:?}", report);
    Success::ok(report)
}

pub fn mount_health() -> actix_web::Scope {
    web::scope("/health").service(get_health)
}
