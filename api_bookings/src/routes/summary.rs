use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::{error::Res, http::Success};
use db::Store;

use crate::{dtos::booking::SummaryQuery, services};

/// Monthly booking counts and approved revenue for the dashboard chart.
///
/// `?year=2024` picks a year; without it the current year is used.
#[get("/summary")]
pub async fn get_summary(
    store: web::Data<Arc<Store>>,
    query: web::Query<SummaryQuery>,
) -> Res<impl Responder> {
    Success::ok(services::booking::get_monthly_summary(&store, query.year))
}
