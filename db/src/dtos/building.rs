use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingCreateRequest {
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_per_day: f64,
    pub image: String,
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingUpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price_per_day: Option<f64>,
    pub image: Option<String>,
}
