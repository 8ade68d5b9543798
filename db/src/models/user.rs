use chrono::NaiveDateTime;
use common::misc::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
}
