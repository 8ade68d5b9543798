use common::{
    error::{AppError, Res},
    pagination::{Page, paginate},
};
use db::{
    Store,
    dtos::building::{BuildingCreateRequest, BuildingUpdateRequest},
    models::building::Building,
};
use uuid::Uuid;

use crate::dtos::building::BuildingListQuery;

/// Filters the catalogue and returns the requested page.
///
/// The search term is matched case-insensitively as a substring of the
/// name, description or location, whitespace included. An empty term
/// matches everything.
pub fn search_buildings(
    store: &Store,
    query: BuildingListQuery,
    default_page_size: usize,
) -> Res<Page<Building>> {
    let term = query
        .search
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let matching: Vec<Building> = db::building::get_all_buildings(store)
        .into_iter()
        .filter(|b| term.as_deref().is_none_or(|t| matches_term(b, t)))
        .collect();
    log::debug!(
        "Catalogue search {:?} matched {} buildings",
        term,
        matching.len()
    );

    paginate(
        matching,
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(default_page_size),
    )
}

fn matches_term(building: &Building, term: &str) -> bool {
    [&building.name, &building.description, &building.location]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

pub fn get_building_by_id(store: &Store, building_id: Uuid) -> Res<Building> {
    db::building::get_building_by_id(store, building_id)
        .ok_or_else(|| AppError::not_found("building", building_id))
}

pub fn create_building(store: &Store, req: BuildingCreateRequest) -> Building {
    db::building::insert_building(store, req)
}

pub fn update_building(
    store: &Store,
    building_id: Uuid,
    req: BuildingUpdateRequest,
) -> Res<Building> {
    db::building::update_building(store, building_id, req)
        .ok_or_else(|| AppError::not_found("building", building_id))
}

/// Removes the venue. Bookings that reference it are kept as they are.
pub fn delete_building(store: &Store, building_id: Uuid) -> Res<()> {
    if db::building::delete_building(store, building_id) {
        Ok(())
    } else {
        Err(AppError::not_found("building", building_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: Option<&str>, page: usize, page_size: usize) -> BuildingListQuery {
        BuildingListQuery {
            search: search.map(str::to_string),
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    fn store_with(count: usize) -> Store {
        let store = Store::new();
        for i in 0..count {
            db::building::insert_building(
                &store,
                BuildingCreateRequest {
                    name: format!("Venue {}", i),
                    description: if i % 2 == 0 { "Rooftop Terrace" } else { "Basement" }.to_string(),
                    location: "Old Town".to_string(),
                    price_per_day: 100.0,
                    image: String::new(),
                },
            );
        }
        store
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let store = db::setup(true);

        let by_name = search_buildings(&store, query(Some("BALLROOM"), 1, 10), 6).unwrap();
        assert_eq!(by_name.total_items, 1);
        assert_eq!(by_name.items[0].name, "Grand Ballroom");

        let by_description = search_buildings(&store, query(Some("trade shows"), 1, 10), 6).unwrap();
        assert_eq!(by_description.items[0].name, "Exhibition Hall");

        let by_location = search_buildings(&store, query(Some("center"), 1, 10), 6).unwrap();
        assert_eq!(by_location.total_items, 3);
    }

    #[test]
    fn filtered_result_is_paged() {
        let store = store_with(9);
        // five venues have "Rooftop Terrace" in their description
        let first = search_buildings(&store, query(Some("terrace"), 1, 2), 6).unwrap();
        assert_eq!(first.total_items, 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 2);

        let last = search_buildings(&store, query(Some("terrace"), 3, 2), 6).unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].name, "Venue 8");

        let beyond = search_buildings(&store, query(Some("terrace"), 4, 2), 6).unwrap();
        assert!(beyond.items.is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_term() {
        let store = db::setup(true);

        let spaced = search_buildings(&store, query(Some("  ballroom"), 1, 10), 6).unwrap();
        assert_eq!(spaced.total_items, 0);

        let word = search_buildings(&store, query(Some(" hall"), 1, 10), 6).unwrap();
        assert_eq!(word.total_items, 1);
        assert_eq!(word.items[0].name, "Exhibition Hall");
    }

    #[test]
    fn empty_search_uses_default_page_size() {
        let store = store_with(8);
        let page = search_buildings(
            &store,
            BuildingListQuery {
                search: Some(String::new()),
                ..Default::default()
            },
            6,
        )
        .unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 6);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.total_items, 8);
    }

    #[test]
    fn delete_missing_building_is_not_found() {
        let store = Store::new();
        assert!(matches!(
            delete_building(&store, Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }
}
