use serde::{Deserialize, Serialize};

/// One row of the national roll export: a polling station with its station
/// count of registered voters and a geocoded coordinate. Column names follow
/// the election committee's export; the per-party vote columns that surround
/// them are ignored on read.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RollBallot {
    #[serde(rename = "שם ישוב")]
    pub town_name: String,
    #[serde(rename = "ברזל")]
    pub ballot_id: String,
    #[serde(rename = "כתובת קלפי", default)]
    pub address: Option<String>,
    #[serde(rename = "בזב")]
    pub registered_voters: u32,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub district: Option<u32>,
}

impl RollBallot {
    /// A ballot is usable only once the geocoding step has filled both
    /// coordinate fields with real numbers.
    pub fn has_coordinate(&self) -> bool {
        matches!((self.lat, self.lng), (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite())
    }
}
