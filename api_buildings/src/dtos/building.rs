use serde::{Deserialize, Serialize};

/// Catalogue query string: `?search=hall&page=2&pageSize=6`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingListQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}
