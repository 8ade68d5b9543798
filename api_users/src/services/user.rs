use common::{
    error::{AppError, Res},
    misc::Role,
};
use db::{
    Store,
    dtos::user::{UserCreateRequest, UserUpdateRequest},
    models::user::User,
};
use uuid::Uuid;

use crate::dtos::user::SignupRequest;

pub fn get_users(store: &Store) -> Vec<User> {
    db::user::get_all_users(store)
}

pub fn get_user_by_id(store: &Store, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(store, user_id).ok_or_else(|| AppError::not_found("user", user_id))
}

pub fn get_user_by_email(store: &Store, email: &str) -> Res<User> {
    db::user::get_user_by_email(store, email)
        .ok_or_else(|| AppError::NotFound(format!("no user with email {}", email)))
}

/// Registers a client account. Emails are not checked for duplicates.
pub fn sign_up(store: &Store, req: SignupRequest) -> User {
    let user = db::user::insert_user(
        store,
        UserCreateRequest {
            email: req.email,
            phone: req.phone,
            role: Role::Client,
        },
    );
    log::info!("New client signed up: {}", user.id);
    user
}

pub fn create_user(store: &Store, req: UserCreateRequest) -> User {
    db::user::insert_user(store, req)
}

pub fn update_user(store: &Store, user_id: Uuid, req: UserUpdateRequest) -> Res<User> {
    db::user::update_user(store, user_id, req).ok_or_else(|| AppError::not_found("user", user_id))
}

pub fn delete_user(store: &Store, user_id: Uuid) -> Res<()> {
    if db::user::delete_user(store, user_id) {
        Ok(())
    } else {
        Err(AppError::not_found("user", user_id))
    }
}
