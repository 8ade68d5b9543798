use parking_lot::RwLock;
use std::sync::Arc;

use models::{booking::Booking, building::Building, user::User};

pub mod booking;
pub mod building;
pub mod seed;
pub mod summary;
pub mod user;

pub mod models {
    pub mod booking;
    pub mod building;
    pub mod summary;
    pub mod user;
}

pub mod dtos {
    pub mod booking;
    pub mod building;
    pub mod user;
}

/// In-memory store owning the user, building and booking collections.
///
/// Collections keep insertion order. Each function in [`user`], [`building`]
/// and [`booking`] takes one lock and finishes before returning, so a read
/// issued after a write always sees it.
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) buildings: RwLock<Vec<Building>>,
    pub(crate) bookings: RwLock<Vec<Booking>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builds the shared store, loading the demo fixture when `seed` is set.
pub fn setup(seed: bool) -> Arc<Store> {
    let store = Store::new();
    if seed {
        seed::seed(&store);
        log::info!(
            "Seeded store with {} users, {} buildings and {} bookings",
            store.users.read().len(),
            store.buildings.read().len(),
            store.bookings.read().len()
        );
    }
    Arc::new(store)
}

pub(crate) fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
