use common::misc::Role;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UserCreateRequest {
    pub email: String,
    pub phone: String,
    pub role: Role,
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdateRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
}
