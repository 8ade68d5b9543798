use std::sync::Arc;

use actix_web::{
    Responder, delete, get, post, put,
    web::{self},
};
use common::{error::Res, http::Success};
use db::{
    Store,
    dtos::user::{UserCreateRequest, UserUpdateRequest},
};
use uuid::Uuid;

use crate::{
    dtos::user::{EmailLookupQuery, SignupRequest},
    services,
};

/// Creates a client account from an email and phone number.
#[post("")]
pub async fn post_signup(
    store: web::Data<Arc<Store>>,
    req: web::Json<SignupRequest>,
) -> Res<impl Responder> {
    let user = services::user::sign_up(&store, req.into_inner());
    Success::created(user)
}

#[get("")]
pub async fn get_users(store: web::Data<Arc<Store>>) -> Res<impl Responder> {
    Success::ok(services::user::get_users(&store))
}

/// Looks a user up by exact email, e.g. `/users/lookup?email=client@example.com`.
#[get("/lookup")]
pub async fn get_user_by_email(
    store: web::Data<Arc<Store>>,
    query: web::Query<EmailLookupQuery>,
) -> Res<impl Responder> {
    let user = services::user::get_user_by_email(&store, &query.email)?;
    Success::ok(user)
}

#[get("/{user_id}")]
pub async fn get_user(
    store: web::Data<Arc<Store>>,
    user_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    let user = services::user::get_user_by_id(&store, user_id.into_inner())?;
    Success::ok(user)
}

#[post("")]
pub async fn post_user(
    store: web::Data<Arc<Store>>,
    req: web::Json<UserCreateRequest>,
) -> Res<impl Responder> {
    let user = services::user::create_user(&store, req.into_inner());
    Success::created(user)
}

/// Partially updates a user; absent fields are kept.
#[put("/{user_id}")]
pub async fn put_user(
    store: web::Data<Arc<Store>>,
    user_id: web::Path<Uuid>,
    req: web::Json<UserUpdateRequest>,
) -> Res<impl Responder> {
    let user = services::user::update_user(&store, user_id.into_inner(), req.into_inner())?;
    Success::ok(user)
}

#[delete("/{user_id}")]
pub async fn delete_user(
    store: web::Data<Arc<Store>>,
    user_id: web::Path<Uuid>,
) -> Res<impl Responder> {
    services::user::delete_user(&store, user_id.into_inner())?;
    Success::deleted()
}
