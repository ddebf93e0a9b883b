use serde::{Deserialize, Serialize};

/// Venue (cinema hall, stadium, club)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub capacity: String,
}

impl From<&Venue> for VenueDto {
    fn from(v: &Venue) -> Self {
        Self {
            id: Some(v.id.clone()),
            name: v.name.clone(),
            address: v.address.clone(),
            city: v.city.clone(),
            capacity: v.capacity.to_string(),
        }
    }
}
