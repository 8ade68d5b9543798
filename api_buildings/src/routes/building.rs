use std::sync::Arc;

use actix_web::{
    Responder, delete, get, post, put,
    web::{self},
};
use common::{env_config::Config, error::Res, http::Success};
use db::{
    Store,
    dtos::building::{BuildingCreateRequest, BuildingUpdateRequest},
};
use uuid::Uuid;

use crate::{dtos::building::BuildingListQuery, services};

/// Lists venues, optionally filtered by `search`, one page at a time.
///
/// # Arguments
///
/// * `config` - Supplies the page size used when `pageSize` is absent.
/// * `store` - The in-memory store.
/// * `query` - `search`, `page` (1-based) and `pageSize`.
///
/// # Returns
///
/// A page object `{items, page, pageSize, totalItems, totalPages}`, or 400
/// when `page` or `pageSize` is zero.
#[get("")]
pub async fn get_buildings(
    config: web::Data<Arc<Config>>,
    store: web::Data<Arc<Store>>,
    query: web::Query<BuildingListQuery>,
) -> Res<impl Responder> {
    let page =
        services::building::search_buildings(&store, query.into_inner(), config.default_page_size)?;
    Success::ok(page)
}

#[get("/{building_id}")]
pub async fn get_building(
    store: web::Data<Arc<Store>>,
    building_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    let building = services::building::get_building_by_id(&store, building_id.into_inner())?;
    Success::ok(building)
}

#[post("")]
pub async fn post_building(
    store: web::Data<Arc<Store>>,
    req: web::Json<BuildingCreateRequest>,
) -> Res<impl Responder> {
    let building = services::building::create_building(&store, req.into_inner());
    Success::created(building)
}

/// Partially updates a venue; absent fields are kept.
#[put("/{building_id}")]
pub async fn put_building(
    store: web::Data<Arc<Store>>,
    building_id: web::Path<Uuid>,
    req: web::Json<BuildingUpdateRequest>,
) -> Res<impl Responder> {
    let building =
        services::building::update_building(&store, building_id.into_inner(), req.into_inner())?;
    Success::ok(building)
}

#[delete("/{building_id}")]
pub async fn delete_building(
    store: web::Data<Arc<Store>>,
    building_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    services::building::delete_building(&store, building_id.into_inner())?;
    Success::deleted()
}
