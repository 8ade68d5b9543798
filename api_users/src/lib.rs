use actix_web::web;

pub mod routes {
    pub mod user;
}

mod services {
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod user;
}

/// Client-facing user routes (signup).
pub fn mount_client_users() -> actix_web::Scope {
    web::scope("/users").service(routes::user::post_signup)
}

/// Admin user management.
pub fn mount_admin_users() -> actix_web::Scope {
    web::scope("/users")
        .service(routes::user::get_users)
        .service(routes::user::get_user_by_email)
        .service(routes::user::get_user)
        .service(routes::user::post_user)
        .service(routes::user::put_user)
        .service(routes::user::delete_user)
}
