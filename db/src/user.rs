use uuid::Uuid;

use crate::{
    Store,
    dtos::user::{UserCreateRequest, UserUpdateRequest},
    models::user::User,
    now,
};

pub fn get_all_users(store: &Store) -> Vec<User> {
    store.users.read().clone()
}

pub fn get_user_by_id(store: &Store, user_id: Uuid) -> Option<User> {
    store.users.read().iter().find(|u| u.id == user_id).cloned()
}

/// Exact, case-sensitive match on the stored email.
pub fn get_user_by_email(store: &Store, email: &str) -> Option<User> {
    store.users.read().iter().find(|u| u.email == email).cloned()
}

pub fn insert_user(store: &Store, data: UserCreateRequest) -> User {
    let user = User {
        id: Uuid::new_v4(),
        email: data.email,
        phone: data.phone,
        role: data.role,
        created_at: now(),
    };
    store.users.write().push(user.clone());
    log::debug!("Created user {} ({})", user.id, user.role);
    user
}

/// Users carry no `updated_at`, so only the provided fields change.
pub fn update_user(store: &Store, user_id: Uuid, data: UserUpdateRequest) -> Option<User> {
    let mut users = store.users.write();
    let user = users.iter_mut().find(|u| u.id == user_id)?;

    if let Some(email) = data.email {
        user.email = email;
    }
    if let Some(phone) = data.phone {
        user.phone = phone;
    }
    if let Some(role) = data.role {
        user.role = role;
    }
    Some(user.clone())
}

/// Bookings made by the user are left in place.
pub fn delete_user(store: &Store, user_id: Uuid) -> bool {
    let mut users = store.users.write();
    match users.iter().position(|u| u.id == user_id) {
        Some(index) => {
            users.remove(index);
            log::debug!("Deleted user {}", user_id);
            true
        }
        None => false,
    }
}
