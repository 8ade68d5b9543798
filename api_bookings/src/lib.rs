use actix_web::web;

pub mod routes {
    pub mod booking;
    pub mod summary;
}

mod services {
    pub(crate) mod booking;
}

mod dtos {
    pub(crate) mod booking;
}

/// Booking flow of the client portal.
pub fn mount_client_bookings() -> actix_web::Scope {
    web::scope("/bookings")
        .service(routes::booking::post_booking)
        .service(routes::booking::get_user_bookings)
        .service(routes::booking::get_booking)
        .service(routes::booking::put_payment_proof)
}

/// Booking review and monthly reporting for admins.
pub fn mount_admin_bookings() -> actix_web::Scope {
    web::scope("/bookings")
        .service(routes::booking::get_bookings)
        .service(routes::summary::get_summary)
        .service(routes::booking::get_booking)
        .service(routes::booking::put_booking)
        .service(routes::booking::put_status)
        .service(routes::booking::post_approve)
        .service(routes::booking::post_reject)
        .service(routes::booking::delete_booking)
}
