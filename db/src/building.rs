use uuid::Uuid;

use crate::{
    Store,
    dtos::building::{BuildingCreateRequest, BuildingUpdateRequest},
    models::building::Building,
    now,
};

pub fn get_all_buildings(store: &Store) -> Vec<Building> {
    store.buildings.read().clone()
}

pub fn get_building_by_id(store: &Store, building_id: Uuid) -> Option<Building> {
    store
        .buildings
        .read()
        .iter()
        .find(|b| b.id == building_id)
        .cloned()
}

pub fn insert_building(store: &Store, data: BuildingCreateRequest) -> Building {
    let stamp = now();
    let building = Building {
        id: Uuid::new_v4(),
        name: data.name,
        description: data.description,
        location: data.location,
        price_per_day: data.price_per_day,
        image: data.image,
        created_at: stamp,
        updated_at: stamp,
    };
    store.buildings.write().push(building.clone());
    log::debug!("Created building {} ({})", building.id, building.name);
    building
}

/// Merges the provided fields and refreshes `updated_at`.
///
/// Bookings already made keep the price they were made at.
pub fn update_building(
    store: &Store,
    building_id: Uuid,
    data: BuildingUpdateRequest,
) -> Option<Building> {
    let mut buildings = store.buildings.write();
    let building = buildings.iter_mut().find(|b| b.id == building_id)?;

    if let Some(name) = data.name {
        building.name = name;
    }
    if let Some(description) = data.description {
        building.description = description;
    }
    if let Some(location) = data.location {
        building.location = location;
    }
    if let Some(price_per_day) = data.price_per_day {
        building.price_per_day = price_per_day;
    }
    if let Some(image) = data.image {
        building.image = image;
    }
    building.updated_at = now();
    Some(building.clone())
}

pub fn delete_building(store: &Store, building_id: Uuid) -> bool {
    let mut buildings = store.buildings.write();
    match buildings.iter().position(|b| b.id == building_id) {
        Some(index) => {
            buildings.remove(index);
            log::debug!("Deleted building {}", building_id);
            true
        }
        None => false,
    }
}
