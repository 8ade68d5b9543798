use chrono::{NaiveDate, NaiveDateTime};
use common::misc::{BookingStatus, Role};
use uuid::Uuid;

use crate::{
    Store,
    models::{booking::Booking, building::Building, user::User},
};

struct Fixture {
    users: Vec<User>,
    buildings: Vec<Building>,
    bookings: Vec<Booking>,
}

/// Loads the demo admin, client, three venues and two March 2024 bookings.
pub fn seed(store: &Store) {
    let Some(fixture) = fixture() else {
        log::warn!("Seed fixture could not be built, store left empty");
        return;
    };
    store.users.write().extend(fixture.users);
    store.buildings.write().extend(fixture.buildings);
    store.bookings.write().extend(fixture.bookings);
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    date(year, month, day)?.and_hms_opt(0, 0, 0)
}

fn fixture() -> Option<Fixture> {
    let admin = User {
        id: Uuid::new_v4(),
        email: "admin@example.com".to_string(),
        phone: "+1234567890".to_string(),
        role: Role::Admin,
        created_at: midnight(2024, 1, 1)?,
    };
    let client = User {
        id: Uuid::new_v4(),
        email: "client@example.com".to_string(),
        phone: "+1234567891".to_string(),
        role: Role::Client,
        created_at: midnight(2024, 1, 2)?,
    };

    let opened = midnight(2024, 1, 1)?;
    let venue = |name: &str, description: &str, location: &str, price: f64, image: &str| Building {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        price_per_day: price,
        image: image.to_string(),
        created_at: opened,
        updated_at: opened,
    };
    let ballroom = venue(
        "Grand Ballroom",
        "Elegant venue perfect for weddings and large events",
        "Downtown, City Center",
        1000.0,
        "https://images.unsplash.com/photo-1519167758481-83f550bb49b3",
    );
    let conference = venue(
        "Conference Center",
        "Modern space ideal for business meetings and conferences",
        "Business District",
        750.0,
        "https://images.unsplash.com/photo-1431540015161-0bf868a2d407",
    );
    let exhibition = venue(
        "Exhibition Hall",
        "Spacious venue for exhibitions and trade shows",
        "Convention Center",
        1200.0,
        "https://images.unsplash.com/photo-1497366811353-6870744d04b2",
    );

    let bookings = vec![
        Booking {
            id: Uuid::new_v4(),
            building_id: ballroom.id,
            user_id: client.id,
            start_date: date(2024, 3, 15)?,
            end_date: date(2024, 3, 16)?,
            status: BookingStatus::Approved,
            payment_proof: Some("payment1.jpg".to_string()),
            total_price: 1000.0,
            created_at: midnight(2024, 3, 1)?,
            updated_at: midnight(2024, 3, 1)?,
            google_calendar_event_id: Some("event1".to_string()),
        },
        Booking {
            id: Uuid::new_v4(),
            building_id: conference.id,
            user_id: client.id,
            start_date: date(2024, 3, 20)?,
            end_date: date(2024, 3, 21)?,
            status: BookingStatus::Pending,
            payment_proof: None,
            total_price: 750.0,
            created_at: midnight(2024, 3, 5)?,
            updated_at: midnight(2024, 3, 5)?,
            google_calendar_event_id: None,
        },
    ];

    Some(Fixture {
        users: vec![admin, client],
        buildings: vec![ballroom, conference, exhibition],
        bookings,
    })
}
