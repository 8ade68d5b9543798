use actix_web::web;

pub mod routes {
    pub mod building;
}

mod services {
    pub(crate) mod building;
}

mod dtos {
    pub(crate) mod building;
}

/// Read-only venue catalogue for clients.
pub fn mount_catalog() -> actix_web::Scope {
    web::scope("/buildings")
        .service(routes::building::get_buildings)
        .service(routes::building::get_building)
}

/// Venue management for admins.
pub fn mount_admin_buildings() -> actix_web::Scope {
    web::scope("/buildings")
        .service(routes::building::get_buildings)
        .service(routes::building::get_building)
        .service(routes::building::post_building)
        .service(routes::building::put_building)
        .service(routes::building::delete_building)
}
